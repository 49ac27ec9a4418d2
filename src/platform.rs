use std::fmt;
use std::process::{Child, Command};

use crate::Result;

/// Operating system family, used to pick the fallback launch command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux, the BSDs and other desktops that ship `xdg-open`
    Unix,
    /// Anything else, carrying the OS name for diagnostics
    Other(String),
}

impl Platform {
    /// Resolve the platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(unix) {
            Platform::Unix
        } else {
            Platform::Other(std::env::consts::OS.to_string())
        }
    }

    /// Parse a free-form OS name such as `"Mac OS X"`, `"Windows 11"` or `"linux"`
    pub fn from_os_name(name: &str) -> Self {
        let os = name.to_lowercase();
        if os.contains("mac") || os.contains("darwin") {
            Platform::MacOs
        } else if os.contains("win") {
            Platform::Windows
        } else if os.contains("nix") || os.contains("nux") || os.contains("bsd") {
            Platform::Unix
        } else {
            Platform::Other(name.to_string())
        }
    }

    /// The command that opens `url` on this platform, if there is one
    ///
    /// The URL is always passed as a single argument, so characters such as
    /// `&`, `;` or spaces are never interpreted by a shell.
    pub fn launch_command(&self, url: &str) -> Option<LaunchCommand> {
        let (program, mut args): (&'static str, Vec<String>) = match self {
            Platform::Windows => ("rundll32", vec!["url.dll,FileProtocolHandler".to_string()]),
            Platform::MacOs => ("open", Vec::new()),
            Platform::Unix => ("xdg-open", Vec::new()),
            Platform::Other(_) => return None,
        };
        args.push(url.to_string());
        Some(LaunchCommand { program, args })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => f.write_str("windows"),
            Platform::MacOs => f.write_str("macos"),
            Platform::Unix => f.write_str("unix"),
            Platform::Other(name) => f.write_str(name),
        }
    }
}

/// A program and its argument vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl LaunchCommand {
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(self.program);
        command.args(&self.args);
        command
    }

    /// Spawn the command without waiting for it to exit
    pub fn spawn(&self) -> Result<Child> {
        Ok(self.to_command().spawn()?)
    }

    /// Spawn the command and reap it on a background thread
    ///
    /// The caller returns as soon as the process has started; the child is
    /// waited on elsewhere so it does not linger as a zombie.
    pub fn spawn_detached(&self) -> Result<()> {
        let mut child = self.spawn()?;
        std::thread::Builder::new()
            .name(format!("reap-{}", self.program))
            .spawn(move || {
                let _ = child.wait();
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_os_names() {
        assert_eq!(Platform::from_os_name("Windows 10"), Platform::Windows);
        assert_eq!(Platform::from_os_name("Mac OS X"), Platform::MacOs);
        assert_eq!(Platform::from_os_name("Darwin"), Platform::MacOs);
        assert_eq!(Platform::from_os_name("Linux"), Platform::Unix);
        assert_eq!(Platform::from_os_name("FreeBSD"), Platform::Unix);
        assert_eq!(
            Platform::from_os_name("Plan9"),
            Platform::Other("Plan9".to_string())
        );
    }

    #[test]
    fn windows_uses_protocol_handler() {
        let cmd = Platform::Windows
            .launch_command("https://example.com/?a=1&b=2")
            .unwrap();
        assert_eq!(cmd.program, "rundll32");
        assert_eq!(
            cmd.args,
            vec!["url.dll,FileProtocolHandler", "https://example.com/?a=1&b=2"]
        );
    }

    #[test]
    fn url_is_a_single_argument() {
        let url = "https://example.com/a b;rm -rf ~";
        let mac = Platform::MacOs.launch_command(url).unwrap();
        assert_eq!(mac.program, "open");
        assert_eq!(mac.args, vec![url]);

        let unix = Platform::Unix.launch_command(url).unwrap();
        assert_eq!(unix.program, "xdg-open");
        assert_eq!(unix.args, vec![url]);
    }

    #[cfg(unix)]
    #[test]
    fn detached_spawn_returns_once_started() {
        let command = LaunchCommand {
            program: "true",
            args: vec!["https://example.com".to_string()],
        };
        command.spawn_detached().unwrap();
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let command = LaunchCommand {
            program: "definitely-not-a-real-launcher",
            args: Vec::new(),
        };
        assert!(matches!(
            command.spawn_detached(),
            Err(crate::BrowserLauncherError::Spawn(_))
        ));
    }

    #[test]
    fn other_platform_has_no_command() {
        let other = Platform::Other("haiku".to_string());
        assert!(other.launch_command("https://example.com").is_none());
        assert_eq!(other.to_string(), "haiku");
    }
}
