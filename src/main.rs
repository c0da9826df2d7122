use clap::Parser;
use clap::error::ErrorKind;
use pathjump::cli::Cli;
use pathjump::command::{self, Session, browse, open};
use pathjump::config::AppConfig;
use pathjump::{debug_log, error};
use std::process::ExitCode;

fn main() -> ExitCode {
    // 加载配置
    let config = AppConfig::load();

    let verbose = config.is_verbose();
    let start = if verbose {
        Some(std::time::Instant::now())
    } else {
        None
    };

    let mut session = Session::open(config);

    // 如果 argv 只有一个元素（程序名），进入浏览界面
    let raw_args: Vec<String> = std::env::args().collect();
    let result = if raw_args.len() <= 1 {
        browse::handle_browse(&mut session)
    } else {
        // 如果用户输入的是 `pj <alias>` 这种非子命令形式，clap 可能解析失败
        // 这时候 fallback 到别名跳转逻辑
        match Cli::try_parse() {
            Ok(cli) => match cli.command {
                Some(subcmd) => command::dispatch(subcmd, &mut session),
                None if cli.args.is_empty() => browse::handle_browse(&mut session),
                None => open::handle_open(&cli.args, &session),
            },
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::DisplayVersion | ErrorKind::DisplayHelp
                ) =>
            {
                let _ = e.print();
                Ok(())
            }
            Err(_) => open::handle_open(&raw_args[1..], &session),
        }
    };

    if let Some(start) = start {
        debug_log!(session.config, "duration: {} ms", start.elapsed().as_millis());
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
