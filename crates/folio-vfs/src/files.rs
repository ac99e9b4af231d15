//! The fixed set of virtual files and their renderers.

use folio_types::config::SiteConfig;

/// One of the files visible in the portfolio terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VirtualFile {
    Projects,
    Resume,
    Skills,
    Contact,
    About,
    Env,
}

impl VirtualFile {
    /// Every file, in `ls` order.
    pub const ALL: [VirtualFile; 6] = [
        Self::Projects,
        Self::Resume,
        Self::Skills,
        Self::Contact,
        Self::About,
        Self::Env,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Projects => "projects.txt",
            Self::Resume => "resume.pdf",
            Self::Skills => "skills.txt",
            Self::Contact => "contact.txt",
            Self::About => "about.txt",
            Self::Env => ".env",
        }
    }

    /// Exact-match lookup by file name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Binary files cannot be shown by `cat`; they are fetched with `wget`.
    pub fn is_binary(self) -> bool {
        matches!(self, Self::Resume)
    }

    /// Render the file's current contents from `config`.
    pub fn render(self, config: &SiteConfig) -> String {
        match self {
            Self::Projects => render_projects(config),
            Self::Resume => {
                "Error: Cannot display binary file. Use 'wget resume.pdf' to download.".to_string()
            },
            Self::Skills => render_skills(config),
            Self::Contact => format!(
                "Contact Information:\n• Email: {}\n• GitHub: {}\n• LinkedIn: {}",
                config.links.email_address(),
                config.links.github,
                config.links.linkedin,
            ),
            Self::About => format!(
                "Name: {}\nRole: {}\nLocation: {}\n\nSummary:\n{}",
                config.name, config.role, config.location, config.summary,
            ),
            Self::Env => render_env(config),
        }
    }
}

/// Read a file by name. `None` means no such file.
pub fn read(name: &str, config: &SiteConfig) -> Option<String> {
    VirtualFile::from_name(name).map(|file| file.render(config))
}

fn render_projects(config: &SiteConfig) -> String {
    let list = if config.pinned_repos.is_empty() {
        "No featured projects configured".to_string()
    } else {
        config
            .pinned_repos
            .iter()
            .enumerate()
            .map(|(i, repo)| {
                let mut entry = format!("{}. {} - {}", i + 1, repo.display_name(), repo.url());
                if let Some(desc) = repo.description() {
                    entry.push_str(&format!("\n   {desc}"));
                }
                entry
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        "Featured Projects:\n{list}\n\nView all projects at: {}",
        config.links.github
    )
}

fn render_skills(config: &SiteConfig) -> String {
    let mut out = String::from("Technical Skills:");
    for skill in &config.skills {
        out.push_str(&format!("\n• {skill}"));
    }
    out
}

fn render_env(config: &SiteConfig) -> String {
    format!(
        "# Portfolio Environment Variables\n\
         DEVELOPER_NAME=\"{}\"\n\
         ROLE=\"{}\"\n\
         PASSION_LEVEL=\"Maximum\"\n\
         COFFEE_CONSUMPTION=\"High\"\n\
         DEBUG_MODE=\"Always\"\n\
         LEARNING_MODE=\"Continuous\"\n\
         COLLABORATION=\"Open\"\n\
         HIRING_STATUS=\"Available\"\n\
         \n\
         # Fun stats\n\
         COMMITS_THIS_MONTH=\"42\"\n\
         BUGS_FIXED=\"∞\"\n\
         FEATURES_SHIPPED=\"Many\"",
        config.name, config.role,
    )
}
