//! Profile cards: neofetch, fastfetch.

use folio_types::config::SiteConfig;
use folio_types::error::Result;

use crate::interpreter::{CommandOutput, Environment};

// ---------------------------------------------------------------------------
// neofetch
// ---------------------------------------------------------------------------

/// Text width inside the neofetch box.
const CARD_WIDTH: usize = 35;

pub(crate) fn neofetch(_args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    let cfg = env.config;
    let location = if cfg.location.is_empty() {
        "Unknown"
    } else {
        &cfg.location
    };
    let tech = cfg
        .skills
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let rows = [
        format!("Role: {}", cfg.role),
        format!("Location: {location}"),
        format!("Tech: {tech}"),
        "Contact: Available via terminal".to_string(),
        format!("GitHub: {}", cfg.github_username),
    ];

    let rule = "─".repeat(CARD_WIDTH + 2);
    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(format!("┌{rule}┐"));
    lines.push(card_row(&cfg.name));
    lines.push(format!("├{rule}┤"));
    lines.extend(rows.iter().map(|r| card_row(r)));
    lines.push(format!("└{rule}┘"));
    Ok(CommandOutput::Text(lines.join("\n")))
}

/// Pad (or cut) `text` to the card width, in characters.
fn card_row(text: &str) -> String {
    format!("│ {text:<width$.width$} │", width = CARD_WIDTH)
}

// ---------------------------------------------------------------------------
// fastfetch
// ---------------------------------------------------------------------------

/// Width of the ASCII logo column.
const LOGO_WIDTH: usize = 48;

pub(crate) fn fastfetch(_args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    let info = fastfetch_info(env.config);
    let logo = logo_rows(info.len());
    let lines: Vec<String> = logo
        .iter()
        .zip(&info)
        .map(|(art, text)| format!("{art}  {text}").trim_end().to_string())
        .collect();
    Ok(CommandOutput::Text(lines.join("\n")))
}

fn fastfetch_info(cfg: &SiteConfig) -> Vec<String> {
    let ff = &cfg.fastfetch;
    let or = |value: &Option<String>, fallback: &str| -> String {
        value.clone().unwrap_or_else(|| fallback.to_string())
    };
    // Only the first space goes: "Ada Byron King" -> "adabyron king".
    let user = cfg.name.to_lowercase().replacen(' ', "", 1);
    let header = format!("{user}@{}", or(&ff.host, "portfolio"));
    let underline = "─".repeat(header.chars().count());

    let fields = [
        ("OS", or(&ff.os, "Portfolio OS")),
        ("Host", or(&ff.host, "devaansh-dev")),
        ("Kernel", or(&ff.kernel, "Node.js 20.x")),
        ("Uptime", or(&ff.uptime, "Always Online")),
        ("Packages", or(&ff.packages, "npm (1337 packages)")),
        ("Shell", or(&ff.shell, "bash 5.1.8")),
        ("Resolution", or(&ff.resolution, "Responsive")),
        ("DE", or(&ff.theme, "Dark/Light Auto")),
        ("WM", or(&ff.icons, "Lucide React")),
        ("Terminal", or(&ff.terminal, "Interactive Web Terminal")),
        ("CPU", or(&ff.cpu, "Python Engine")),
        ("GPU", or(&ff.gpu, "CSS Animations")),
        ("Memory", or(&ff.memory, "Optimized for Performance")),
        ("Disk (/)", or(&ff.disk, "Cloud Storage")),
        ("Local IP", or(&ff.localip, "127.0.0.1")),
        ("Public IP", or(&ff.publicip, "Fly.dev")),
        ("Battery", or(&ff.battery, "Powered by Coffee ☕")),
        ("Locale", or(&ff.locale, "en_US.UTF-8")),
    ];

    let palette = ["████"; 8].join(" ");
    let mut info = vec![header, underline];
    info.extend(fields.iter().map(|(k, v)| format!("{k}: {v}")));
    info.extend([String::new(), String::new()]);
    info.push(palette.clone());
    info.push(palette);
    info
}

/// A rounded block of `@` glyphs, `rows` tall and `LOGO_WIDTH` wide.
fn logo_rows(rows: usize) -> Vec<String> {
    const TAPER: [usize; 4] = [16, 12, 8, 4];
    (0..rows)
        .map(|i| {
            let from_edge = i.min(rows - 1 - i);
            let inset = TAPER.get(from_edge).copied().unwrap_or(0);
            let pad = inset / 2;
            format!(
                "{}{}{}",
                " ".repeat(pad),
                "@".repeat(LOGO_WIDTH - inset),
                " ".repeat(pad)
            )
        })
        .collect()
}
