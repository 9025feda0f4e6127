//! Rendering of command results for the terminal.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::app::commands::keys::KeySummary;
use crate::app::commands::status::StatusReport;
use crate::domain::{AppError, CopyResult, KeyStatus, Product, ScoreBand};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

fn structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<Option<String>, AppError> {
    match format {
        OutputFormat::Text => Ok(None),
        OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
        OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(value)?)),
    }
}

pub fn render_status(report: &StatusReport, format: OutputFormat) -> Result<String, AppError> {
    if let Some(rendered) = structured(report, format)? {
        return Ok(rendered);
    }

    let mut out = String::new();
    if report.has_valid_keys {
        let _ = writeln!(out, "✅ API keys ready: {}", report.valid_providers.join(", "));
    } else {
        let _ = writeln!(out, "⚠️  No validated API key. Run `marketinsight keys set <provider>`.");
    }
    let _ = writeln!(out, "\nModules:");
    for module in &report.modules {
        let _ = writeln!(out, "  • {} ({}) - {}", module.name, module.command, module.description);
    }
    Ok(out)
}

pub fn render_keys(rows: &[KeySummary], format: OutputFormat) -> Result<String, AppError> {
    if let Some(rendered) = structured(&rows, format)? {
        return Ok(rendered);
    }

    let mut out = String::new();
    for row in rows {
        let fingerprint = row.fingerprint.as_deref().unwrap_or("-");
        let _ = writeln!(
            out,
            "{} {:<9} {:<18} {:<8} {}",
            status_icon(row.status),
            row.provider,
            row.display_name,
            row.status,
            fingerprint
        );
        if row.status != KeyStatus::Valid {
            let _ = writeln!(out, "    get a key: {}", row.console_url);
        }
    }
    Ok(out)
}

pub fn render_products(products: &[Product], format: OutputFormat) -> Result<String, AppError> {
    if let Some(rendered) = structured(&products, format)? {
        return Ok(rendered);
    }
    if products.is_empty() {
        return Ok("No products found in the response.\n".to_string());
    }

    let mut out = String::new();
    for product in products {
        let _ = writeln!(out, "#{} {}", product.id, product.name);
        let _ = writeln!(
            out,
            "   score {:.1} [{}]  gravity {}  price {}  commission {}",
            product.score,
            band_label(product.score_band()),
            product.gravity,
            product.price,
            product.commission
        );
        if !product.description.is_empty() {
            let _ = writeln!(out, "   {}", product.description);
        }
        let _ = writeln!(out, "   EPC {}  CVR {}", product.epc, product.cvr);
        for (label, items) in [
            ("Pain points", &product.pain_points),
            ("Emotions", &product.emotions),
            ("Triggers", &product.triggers),
        ] {
            if !items.is_empty() {
                let _ = writeln!(out, "   {}: {}", label, items.join(", "));
            }
        }
        out.push('\n');
    }
    Ok(out)
}

pub fn render_copy(copy: &CopyResult, format: OutputFormat) -> Result<String, AppError> {
    if let Some(rendered) = structured(copy, format)? {
        return Ok(rendered);
    }
    if copy.is_empty() {
        return Ok("No copy sections found in the response.\n".to_string());
    }

    let sections: [(&str, Vec<(&str, &Vec<String>)>); 3] = [
        (
            "Facebook Ads",
            vec![
                ("Headlines", &copy.facebook.headlines),
                ("Primary texts", &copy.facebook.primary_texts),
                ("CTAs", &copy.facebook.ctas),
            ],
        ),
        (
            "Google Ads",
            vec![
                ("Headlines", &copy.google.headlines),
                ("Descriptions", &copy.google.descriptions),
            ],
        ),
        (
            "Email Marketing",
            vec![
                ("Subjects", &copy.email.subjects),
                ("Preheaders", &copy.email.preheaders),
                ("Bodies", &copy.email.bodies),
            ],
        ),
    ];

    let mut out = String::new();
    for (title, lists) in sections {
        let _ = writeln!(out, "== {} ==", title);
        for (label, items) in lists {
            if items.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{}:", label);
            for (index, item) in items.iter().enumerate() {
                let _ = writeln!(out, "  {}. {}", index + 1, item);
            }
        }
        out.push('\n');
    }
    Ok(out)
}

pub fn status_icon(status: KeyStatus) -> &'static str {
    match status {
        KeyStatus::Valid => "✅",
        KeyStatus::Invalid => "❌",
        KeyStatus::Testing => "⏳",
        KeyStatus::Unset => "⚪",
    }
}

fn band_label(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::High => "high",
        ScoreBand::Medium => "medium",
        ScoreBand::Low => "low",
    }
}
