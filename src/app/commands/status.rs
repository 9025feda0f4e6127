use serde::Serialize;

use crate::app::AppContext;
use crate::ports::KeyStorage;

/// A generation module offered on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleInfo {
    pub command: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const MODULES: &[ModuleInfo] = &[
    ModuleInfo {
        command: "products",
        name: "Product Detector",
        description: "Find winning affiliate products with AI",
    },
    ModuleInfo {
        command: "copy",
        name: "Copy Generator",
        description: "Generate high-converting ad and email copy",
    },
];

/// Dashboard summary.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub has_valid_keys: bool,
    pub valid_providers: Vec<String>,
    pub modules: Vec<ModuleInfo>,
}

pub fn execute<S: KeyStorage>(ctx: &AppContext<S>) -> StatusReport {
    StatusReport {
        has_valid_keys: ctx.keys().has_valid_keys(),
        valid_providers: ctx.keys().valid_providers(),
        modules: MODULES.to_vec(),
    }
}
