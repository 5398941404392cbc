use crate::dispatch::Launcher;
use crate::error::TerminalError;
use crate::quote::{self, Dialect};
use crate::request::{CommandLine, Request};
use crate::spawn::{Invocation, Spawn};

/// Opens a console window through `cmd.exe`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsLauncher;

impl Launcher for WindowsLauncher {
    fn prepare(&self, request: &Request) -> Result<Spawn, TerminalError> {
        let tokens = request.cmd.to_tokens();
        let Some((program, args)) = tokens.split_first() else {
            return Err(TerminalError::EmptyCommand);
        };

        let invocation = if request.keep_open {
            // A raw command is already written for cmd and goes in verbatim
            let inner = match &request.cmd {
                CommandLine::Raw(line) => line.clone(),
                CommandLine::Args(args) => quote::join(args, Dialect::Cmd),
            };
            // `start` is a cmd built-in, so this has to go through the shell.
            // /K keeps the window's shell alive after the command.
            let command_line = format!(
                "start \"Shell for {title}\" /D \"{cwd}\" /W cmd /K \"{inner}\"",
                title = program.replace('"', ""),
                cwd = request.cwd.display(),
            );
            Invocation::Shell { command_line }
        } else {
            Invocation::Console {
                program: program.clone(),
                args: args.to_vec(),
            }
        };

        Ok(Spawn {
            invocation,
            cwd: Some(request.cwd.clone()),
            env: request.env.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Env;

    #[test]
    fn test_new_console_without_shell() {
        let request = Request::new(["python", "-m", "idlelib"], r"C:\work");
        let spawn = WindowsLauncher.prepare(&request).unwrap();

        assert_eq!(
            spawn.invocation,
            Invocation::Console {
                program: "python".into(),
                args: vec!["-m".into(), "idlelib".into()],
            }
        );
        assert_eq!(spawn.cwd.as_deref(), Some(std::path::Path::new(r"C:\work")));
    }

    #[test]
    fn test_keep_open_quotes_each_token() {
        let request = Request::new([r"C:\Program Files\Python\python.exe", "-i"], r"C:\my work")
            .with_keep_open(true);
        let spawn = WindowsLauncher.prepare(&request).unwrap();

        assert_eq!(
            spawn.invocation,
            Invocation::Shell {
                command_line: concat!(
                    r#"start "Shell for C:\Program Files\Python\python.exe" /D "C:\my work" "#,
                    r#"/W cmd /K ""C:\Program Files\Python\python.exe" "-i"""#,
                )
                .into(),
            }
        );
    }

    #[test]
    fn test_keep_open_raw_command_is_verbatim() {
        let request = Request::new("dir /b > out.txt & pause", r"C:\w").with_keep_open(true);
        let spawn = WindowsLauncher.prepare(&request).unwrap();

        assert_eq!(
            spawn.invocation,
            Invocation::Shell {
                command_line: concat!(
                    r#"start "Shell for dir" /D "C:\w" "#,
                    r#"/W cmd /K "dir /b > out.txt & pause""#,
                )
                .into(),
            }
        );
    }

    #[test]
    fn test_keep_open_title_drops_quotes() {
        let request = Request::new(["say\"hi", "x"], r"C:\w").with_keep_open(true);
        let spawn = WindowsLauncher.prepare(&request).unwrap();

        match spawn.invocation {
            Invocation::Shell { command_line } => {
                assert!(command_line.starts_with(r#"start "Shell for sayhi" /D"#));
            }
            Invocation::Console { .. } => panic!("Expected Shell invocation"),
        }
    }

    #[test]
    fn test_keep_open_passes_env() {
        let env = Env::from([("PYTHONUNBUFFERED".to_string(), "1".to_string())]);
        let request = Request::new(["py"], r"C:\")
            .with_env(Some(env.clone()))
            .with_keep_open(true);
        let spawn = WindowsLauncher.prepare(&request).unwrap();
        assert_eq!(spawn.env, Some(env));
    }

    #[test]
    fn test_raw_command_is_split() {
        let request = Request::new(r#""C:\Tools\my app.exe" --verbose"#, r"C:\");
        let spawn = WindowsLauncher.prepare(&request).unwrap();

        assert_eq!(
            spawn.invocation,
            Invocation::Console {
                program: r"C:\Tools\my app.exe".into(),
                args: vec!["--verbose".into()],
            }
        );
    }

    #[test]
    fn test_empty_command_is_rejected() {
        let request = Request::new(Vec::<String>::new(), r"C:\");
        assert!(matches!(
            WindowsLauncher.prepare(&request),
            Err(TerminalError::EmptyCommand)
        ));
    }
}
