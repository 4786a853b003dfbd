//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize as _;
use serde::Serialize;

use crate::models::{Blueprint, Dependency, Impact, Solution};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}. Use: human, json")),
        }
    }
}

/// Result of listing the dependency dataset
#[derive(Debug, Serialize)]
pub struct DependencyListResult {
    /// Number of dependencies listed
    pub total: usize,
    /// The dependency records, in display order
    pub dependencies: Vec<Dependency>,
}

/// Result of a search over the dependency dataset
#[derive(Debug, Serialize)]
pub struct SearchResult {
    /// The query as given on the command line
    pub query: String,
    /// Number of matching dependencies
    pub matched: usize,
    /// The matching records with examples narrowed, in dataset order
    pub dependencies: Vec<Dependency>,
}

/// Result of listing the clean alternatives
#[derive(Debug, Serialize)]
pub struct SolutionListResult {
    /// The solution records, in display order
    pub solutions: Vec<Solution>,
}

/// Result of listing the outage impacts
#[derive(Debug, Serialize)]
pub struct ImpactListResult {
    /// The impact records, in display order
    pub impacts: Vec<Impact>,
}

/// Result of showing the starter blueprint
#[derive(Debug, Serialize)]
pub struct BlueprintResult {
    /// The blueprint with its ordered steps
    pub blueprint: Blueprint,
}

/// Result of the overview command
#[derive(Debug, Serialize)]
pub struct OverviewResult {
    /// Page title
    pub title: String,
    /// The problem in simple words
    pub problem: String,
    /// Number of dependency records
    pub dependencies: usize,
    /// Number of solution records
    pub solutions: usize,
    /// Number of impact records
    pub impacts: usize,
}

fn print_dependency(dep: &Dependency) {
    println!("  {}", dep.name.bold());
    println!("    {}", dep.rationale);
    let tags: Vec<String> = dep.issues.iter().map(|i| format!("[{i}]")).collect();
    println!("    {}", tags.join(" ").yellow());
    if dep.examples.is_empty() {
        return;
    }
    println!("    Where you’ll often see this:");
    for e in &dep.examples {
        println!("      - {e}");
    }
}

impl DependencyListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{}\n", "Current non-renewable dependencies:".cyan());
        for dep in &self.dependencies {
            print_dependency(dep);
            println!();
        }
        println!("{} dependency record(s).", self.total);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl SearchResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.dependencies.is_empty() {
            println!("No dependencies match \"{}\".", self.query);
            return;
        }

        println!("{}\n", format!("Matches for \"{}\":", self.query).cyan());
        for dep in &self.dependencies {
            print_dependency(dep);
            println!();
        }
        println!("{} matching dependency record(s).", self.matched);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl SolutionListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{}\n", "Cleaner, affordable alternatives:".cyan());
        for s in &self.solutions {
            println!("  {}", s.name.bold());
            for b in &s.bullets {
                println!("    - {b}");
            }
            println!();
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ImpactListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{}\n", "What outages cost:".cyan());
        for i in &self.impacts {
            println!("  {}", i.title.bold());
            println!("    {}\n", i.detail);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl BlueprintResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{}\n", self.blueprint.title.cyan());
        for (n, step) in self.blueprint.steps.iter().enumerate() {
            println!("  {}. {step}", n + 1);
        }
        println!("\nResult: {}", self.blueprint.outcome);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OverviewResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{}\n", self.title.bold());
        println!("{}\n", self.problem);
        println!(
            "{} dependencies, {} solutions, {} impacts.",
            self.dependencies, self.solutions, self.impacts
        );
        println!("\nTry: gridfacts search <city or keyword>, e.g., Lagos, coal, diesel");
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
