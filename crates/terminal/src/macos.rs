use crate::dispatch::Launcher;
use crate::env::{self, Env};
use crate::error::TerminalError;
use crate::quote::{Dialect, quote};
use crate::request::Request;
use crate::spawn::{Invocation, Spawn};

/// Opens a window of Terminal.app by scripting it with `osascript`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacLauncher;

impl Launcher for MacLauncher {
    fn prepare(&self, request: &Request) -> Result<Spawn, TerminalError> {
        let effective_env = request.env.clone().unwrap_or_else(env::inherited);
        let shell_cmd = format!(
            "{}; {}",
            repair_preamble(&effective_env)?,
            request.cmd.to_posix()
        );
        let literal = applescript_string(&shell_cmd);

        // With Terminal closed, a plain `do script` opens a second window.
        // With Terminal running, `in window 1` would reuse a busy window.
        let do_script = format!("        do script {literal}");
        let do_script_in_window = format!("        do script {literal} in window 1");

        let script: [&str; 11] = [
            "if application \"Terminal\" is running then",
            "    tell application \"Terminal\"",
            &do_script,
            "        activate",
            "    end tell",
            "else",
            "    tell application \"Terminal\"",
            &do_script_in_window,
            "        activate",
            "    end tell",
            "end if",
        ];

        let mut command_line = String::from("osascript");
        for line in script {
            command_line.push_str(" -e ");
            command_line.push_str(&quote(line, Dialect::Posix));
        }

        Ok(Spawn {
            invocation: Invocation::Shell { command_line },
            cwd: Some(request.cwd.clone()),
            env: request.env.clone(),
        })
    }
}

/// Shell statements restoring the variables Terminal.app would otherwise
/// take from its own environment instead of ours.
fn repair_preamble(env: &Env) -> Result<String, TerminalError> {
    let path = env.get("PATH").ok_or(TerminalError::MissingEnv("PATH"))?;

    let mut preamble = format!(
        "PATH={}; unset TK_LIBRARY; unset TCL_LIBRARY",
        quote(path, Dialect::Posix)
    );

    if let Some(cert_file) = env.get("SSL_CERT_FILE") {
        preamble.push_str("; export SSL_CERT_FILE=");
        preamble.push_str(&quote(cert_file, Dialect::Posix));
    }

    Ok(preamble)
}

/// AppleScript string literal holding `s`.
fn applescript_string(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
