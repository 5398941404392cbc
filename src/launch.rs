use crate::Arguments;
use anyhow::{Context, Result, bail};
use config::Config;
use terminal::{CommandLine, Dispatcher, Env, Platform, Request, Terminal, add_to_path};

pub fn run(arguments: &Arguments) -> Result<()> {
    if arguments.print_schema {
        println!("{}", config::schema());
        return Ok(());
    }

    if arguments.init_config {
        let path = config::ensure_config_exists().context("could not create config")?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = load_config(arguments)?;
    let dispatcher = Dispatcher::default().with_terminal(terminal_choice(arguments, &config));
    let request = build_request(arguments, &config, dispatcher.platform(), terminal::inherited())?;

    log::info!("opening terminal for {:?}", request.cmd);
    dispatcher
        .run(&request)
        .context("could not open a terminal")?;

    Ok(())
}

fn load_config(arguments: &Arguments) -> Result<Config> {
    match &arguments.config {
        Some(path) => config::load_from_path(path)
            .with_context(|| format!("could not load {}", path.display())),
        None => config::load().or_else(|e| {
            log::warn!("ignoring config: {e}");
            Ok(Config::default())
        }),
    }
}

fn terminal_choice(arguments: &Arguments, config: &Config) -> Terminal {
    let name = arguments.terminal.as_deref().unwrap_or(&config.terminal);
    let terminal = Terminal::from(name);
    if terminal == Terminal::Default && name != "default" {
        log::warn!("unknown terminal {name:?}, using the default search order");
    }
    terminal
}

fn build_request(
    arguments: &Arguments,
    config: &Config,
    platform: &Platform,
    inherited: Env,
) -> Result<Request> {
    let cmd = match &arguments.command {
        Some(line) => CommandLine::Raw(line.clone()),
        None if arguments.args.is_empty() => bail!("no command given"),
        None => CommandLine::Args(arguments.args.clone()),
    };

    let cwd = match &arguments.cwd {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("could not determine current directory")?,
    };

    Ok(Request::new(cmd, cwd)
        .with_env(resolve_env(arguments, config, platform, inherited))
        .with_keep_open(arguments.keep_open || config.keep_open))
}

/// The environment for the terminal, or `None` when ours can be inherited as is.
fn resolve_env(
    arguments: &Arguments,
    config: &Config,
    platform: &Platform,
    inherited: Env,
) -> Option<Env> {
    if !arguments.clean_env
        && arguments.env.is_empty()
        && config.env.is_empty()
        && config.path.is_empty()
    {
        return None;
    }

    let mut env = if arguments.clean_env {
        Env::new()
    } else {
        inherited
    };
    env.extend(config.env.clone());
    env.extend(arguments.env.iter().cloned());

    if !config.path.is_empty() {
        // Prepending in reverse keeps the configured order
        let path = config
            .path
            .iter()
            .rev()
            .fold(env.get("PATH").cloned().unwrap_or_default(), |path, dir| {
                add_to_path(dir, &path, platform)
            });
        env.insert("PATH".to_string(), path);
    }

    Some(env)
}

pub fn parse_env_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got {s:?}")),
    }
}
