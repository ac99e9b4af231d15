//! File commands over the virtual file table: ls, cat, wget.

use std::time::Duration;

use folio_platform::DownloadRequest;
use folio_types::error::{FolioError, Result};
use folio_vfs::VirtualFile;

use crate::interpreter::{CommandOutput, Environment};

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

pub(crate) fn ls(_args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
    let names: Vec<&str> = VirtualFile::ALL.iter().map(|f| f.name()).collect();
    Ok(CommandOutput::Text(names.join("  ")))
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

/// Print one file. Only the first operand is read.
pub(crate) fn cat(args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    let name = args
        .first()
        .copied()
        .ok_or_else(|| FolioError::missing("cat", "missing file operand"))?;
    folio_vfs::read(name, env.config)
        .map(CommandOutput::Text)
        .ok_or_else(|| FolioError::NoSuchFile {
            command: "cat".to_string(),
            file: name.to_string(),
        })
}

// ---------------------------------------------------------------------------
// wget
// ---------------------------------------------------------------------------

/// Download a binary file. Text files are only readable through `cat`.
pub(crate) fn wget(args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    let name = args
        .first()
        .copied()
        .ok_or_else(|| FolioError::missing("wget", "missing URL"))?;
    match VirtualFile::from_name(name) {
        Some(file) if file.is_binary() => {
            let request = DownloadRequest {
                href: env.config.links.resume.clone(),
                file_name: file.name().to_string(),
                delay: Duration::from_millis(env.config.terminal.download_delay_ms),
            };
            Ok(CommandOutput::Download {
                text: format!(
                    "Downloading {0}...\n✓ {0} saved successfully",
                    file.name()
                ),
                request,
            })
        },
        _ => Err(FolioError::FileNotFound {
            command: "wget".to_string(),
            file: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::{CommandOutput, CommandRegistry, Environment};
    use folio_platform::{FixedClock, Timestamp};
    use folio_types::config::SiteConfig;
    use folio_types::error::{FolioError, Result};
    use std::time::Duration;

    fn exec_with(config: &SiteConfig, line: &str) -> Result<CommandOutput> {
        let clock = FixedClock(Timestamp::from_unix_secs(0));
        let env = Environment {
            config,
            clock: &clock,
        };
        CommandRegistry::new().execute(line, &env)
    }

    fn exec(line: &str) -> Result<CommandOutput> {
        exec_with(&SiteConfig::default(), line)
    }

    #[test]
    fn ls_lists_every_file() {
        assert_eq!(
            exec("ls").unwrap(),
            CommandOutput::Text(
                "projects.txt  resume.pdf  skills.txt  contact.txt  about.txt  .env".to_string()
            )
        );
    }

    #[test]
    fn cat_reads_file() {
        match exec("cat about.txt").unwrap() {
            CommandOutput::Text(s) => assert!(s.starts_with("Name: Devaansh Pathak")),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn cat_dotfile() {
        match exec("cat .env").unwrap() {
            CommandOutput::Text(s) => assert!(s.contains("HIRING_STATUS")),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn cat_missing_operand() {
        let err = exec("cat").unwrap_err();
        assert!(matches!(err, FolioError::MissingArgument { .. }));
        assert_eq!(format!("{err}"), "cat: missing file operand");
    }

    #[test]
    fn cat_unknown_file_names_it() {
        let err = exec("cat missingfile.txt").unwrap_err();
        assert_eq!(
            format!("{err}"),
            "cat: missingfile.txt: No such file or directory"
        );
    }

    #[test]
    fn cat_file_names_are_case_sensitive() {
        assert!(exec("cat ABOUT.TXT").is_err());
    }

    #[test]
    fn cat_resume_explains_instead_of_dumping() {
        match exec("cat resume.pdf").unwrap() {
            CommandOutput::Text(s) => {
                assert!(s.contains("Cannot display binary file"));
                assert!(s.contains("wget resume.pdf"));
            },
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn wget_resume_requests_download() {
        let mut config = SiteConfig::default();
        config.links.resume = "https://cdn.example.com/cv.pdf".to_string();
        config.terminal.download_delay_ms = 250;
        match exec_with(&config, "wget resume.pdf").unwrap() {
            CommandOutput::Download { text, request } => {
                assert_eq!(
                    text,
                    "Downloading resume.pdf...\n✓ resume.pdf saved successfully"
                );
                assert_eq!(request.href, "https://cdn.example.com/cv.pdf");
                assert_eq!(request.file_name, "resume.pdf");
                assert_eq!(request.delay, Duration::from_millis(250));
            },
            other => panic!("expected download, got {other:?}"),
        }
    }

    #[test]
    fn wget_missing_operand() {
        assert_eq!(
            format!("{}", exec("wget").unwrap_err()),
            "wget: missing URL"
        );
    }

    #[test]
    fn wget_text_file_not_found() {
        assert_eq!(
            format!("{}", exec("wget projects.txt").unwrap_err()),
            "wget: projects.txt: File not found"
        );
        assert!(exec("wget nothing.zip").is_err());
    }
}
