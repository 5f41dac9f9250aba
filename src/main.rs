use anyhow::Result;
use mcq_quiz::utils::logging;
use mcq_quiz::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let mut config = Config::load()?;

    // 第一个参数可覆盖输入路径
    if let Some(input_path) = std::env::args().nth(1) {
        config.input_path = input_path;
    }

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let stats = App::initialize(config)?.run().await?;

    if stats.failed > 0 {
        anyhow::bail!("{} 个文档处理失败", stats.failed);
    }

    Ok(())
}
