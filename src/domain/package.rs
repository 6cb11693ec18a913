//! Descriptions of the Move packages the pipeline publishes.

/// How a package's publish output feeds the collected identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSlot {
    Extensions,
    Stablecoin,
    Usdc,
}

/// One publishable package, in pipeline order.
#[derive(Debug, Clone)]
pub struct PackageSpec {
    /// Directory name under the packages root, also used for `<name>.out.json`.
    pub name: &'static str,
    /// Human-readable name for progress output.
    pub display_name: &'static str,
    /// Which identifier slot the extracted package id fills.
    pub slot: IdSlot,
    /// Whether the publish output should also be scanned for a Treasury
    /// created as a side effect of publishing.
    pub extract_treasury: bool,
}

/// The packages to build and publish, in order.
pub const PACKAGES: &[PackageSpec] = &[
    PackageSpec {
        name: "sui_extensions",
        display_name: "SUI Extensions",
        slot: IdSlot::Extensions,
        extract_treasury: false,
    },
    PackageSpec {
        name: "stablecoin",
        display_name: "Stablecoin",
        slot: IdSlot::Stablecoin,
        extract_treasury: false,
    },
    PackageSpec {
        name: "usdc",
        display_name: "USDC",
        slot: IdSlot::Usdc,
        extract_treasury: true,
    },
];

/// Look up a package spec by directory name.
pub fn find_package(name: &str) -> Option<&'static PackageSpec> {
    PACKAGES.iter().find(|p| p.name == name)
}

/// Comma-separated package names, for error messages.
pub fn package_names() -> String {
    PACKAGES.iter().map(|p| p.name).collect::<Vec<_>>().join(", ")
}
