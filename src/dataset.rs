//! The static energy datasets
//!
//! All record sets are hardcoded, constructed once on first access, and live
//! for the process lifetime. Nothing here is ever added, removed, or mutated
//! after initialization; consumers get `&'static` views and the filter only
//! produces derived copies.

use std::sync::LazyLock;

use crate::models::{Blueprint, Dependency, Impact, Solution};

/// Page title for the overview
pub const TITLE: &str = "Keep Cities Powered — Cleanly and Affordably";

/// One-paragraph statement of the problem
pub const PROBLEM: &str = "Power cuts happen often because cities rely on coal and oil, \
                           and grids aren’t managed efficiently. Backups like diesel \
                           generators are costly and polluting.";

static DEPENDENCIES: LazyLock<Vec<Dependency>> = LazyLock::new(|| {
    vec![
        Dependency::new(
            "Coal-fired Power",
            "Large existing plants supply many cities.",
            &["High CO₂", "Air pollution", "Slow to restart"],
            &[
                "NTPC Dadri → Delhi NCR (India)",
                "Kendal → Johannesburg (South Africa)",
                "Yuhuan → urban Zhejiang (China)",
                "Sual → Metro Manila (Philippines)",
            ],
        ),
        Dependency::new(
            "Oil/Diesel Generators (Backup)",
            "Used during outages for shops, schools, homes.",
            &["Expensive fuel", "Noise", "Local air pollution"],
            &[
                "Karachi (Pakistan)",
                "Lagos (Nigeria)",
                "Manila (Philippines)",
                "Dhaka (Bangladesh)",
                "Jakarta (Indonesia)",
            ],
        ),
        Dependency::new(
            "Oil-based Grid Plants",
            "Cities with limited gas/coal rely on heavy fuel oil/diesel plants.",
            &["High cost/kWh", "CO₂ & SOx/NOx", "Price volatility"],
            &[
                "Port Louis (Mauritius)",
                "Suva (Fiji)",
                "Honiara (Solomon Islands)",
                "Malé (Maldives)",
                "Jazan/Hail (Saudi Arabia)",
            ],
        ),
        Dependency::new(
            "Natural Gas Plants",
            "Often used for baseload/peaking.",
            &["Still fossil fuel", "Methane leakage", "Fuel price swings"],
            &["Common in many urban grids worldwide"],
        ),
    ]
});

static SOLUTIONS: LazyLock<Vec<Solution>> = LazyLock::new(|| {
    vec![
        Solution::new(
            "Rooftop & Community Solar",
            &[
                "Cuts daytime outages",
                "Scales from homes to schools",
                "Pair with batteries for evenings",
            ],
        ),
        Solution::new(
            "Wind (Onshore/Small Urban)",
            &[
                "Cheaper generation in windy regions",
                "Complements solar at night",
            ],
        ),
        Solution::new(
            "Battery Storage & Hybrids",
            &[
                "Instant backup, no fumes",
                "Microgrids for schools & clinics",
                "Smart switching to reduce diesel use",
            ],
        ),
        Solution::new(
            "Demand Response & Smart Meters",
            &[
                "Shifts non‑critical loads",
                "Prevents grid stress",
                "Rewards users for saving power",
            ],
        ),
        Solution::new(
            "Waste-to-Energy / Biogas (Local)",
            &[
                "Use city organic waste",
                "Clean cooking + electricity",
                "Reduces landfill methane",
            ],
        ),
    ]
});

static IMPACTS: LazyLock<Vec<Impact>> = LazyLock::new(|| {
    vec![
        Impact::new(
            "Economic Loss",
            "Shops and SMEs lose revenue during outages.",
        ),
        Impact::new(
            "Interrupted Learning",
            "Schools cannot run labs, lights, or computers.",
        ),
        Impact::new(
            "Health & Air Quality",
            "Diesel fumes worsen asthma and urban smog.",
        ),
        Impact::new(
            "Carbon Emissions",
            "Coal and oil raise CO₂, driving climate change.",
        ),
    ]
});

static BLUEPRINT: LazyLock<Blueprint> = LazyLock::new(|| {
    Blueprint::new(
        "Starter Blueprint for a School or Small Business",
        &[
            "Size critical loads (lights, fans, computers, internet, lab gear).",
            "Install rooftop solar sized for daytime needs + 20% headroom.",
            "Add a lithium battery bank for 4–6 hours of backup at night.",
            "Use a smart controller to switch automatically during outages.",
            "Keep a small, rarely used diesel genset only as a last resort.",
        ],
        "Fewer outages, lower fuel bills, and cleaner air.",
    )
});

/// The fossil-fuel dependencies, in display order
#[must_use]
pub fn dependencies() -> &'static [Dependency] {
    &DEPENDENCIES
}

/// The clean alternatives, in display order
#[must_use]
pub fn solutions() -> &'static [Solution] {
    &SOLUTIONS
}

/// The outage impacts, in display order
#[must_use]
pub fn impacts() -> &'static [Impact] {
    &IMPACTS
}

/// The starter blueprint
#[must_use]
pub fn blueprint() -> &'static Blueprint {
    &BLUEPRINT
}
