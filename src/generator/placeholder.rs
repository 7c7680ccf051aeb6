//! Template placeholders and their vocabularies

use std::fmt;

/// A `{name}` slot that templates may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Market,
    Source,
    Segment,
    Trend,
    Occupancy,
    OccupancyTrend,
    Absorption,
    Supply,
    SupplyTrend,
    Rent,
    Units,
    Properties,
    Volume,
    Narrative,
    Implication,
    HighlightProperty,
    HighlightMetric,
    Period,
    OccupancyNarrative,
    AbsorptionNarrative,
    SupplyNarrative,
    RentNarrative,
    VolumeTrend,
    PricePerUnit,
    CapRate,
}

impl Placeholder {
    pub fn all() -> &'static [Placeholder] {
        use Placeholder::*;
        &[
            Market,
            Source,
            Segment,
            Trend,
            Occupancy,
            OccupancyTrend,
            Absorption,
            Supply,
            SupplyTrend,
            Rent,
            Units,
            Properties,
            Volume,
            Narrative,
            Implication,
            HighlightProperty,
            HighlightMetric,
            Period,
            OccupancyNarrative,
            AbsorptionNarrative,
            SupplyNarrative,
            RentNarrative,
            VolumeTrend,
            PricePerUnit,
            CapRate,
        ]
    }

    /// Token name as written between braces
    pub fn name(&self) -> &'static str {
        use Placeholder::*;
        match self {
            Market => "market",
            Source => "source",
            Segment => "segment",
            Trend => "trend",
            Occupancy => "occupancy",
            OccupancyTrend => "occupancy_trend",
            Absorption => "absorption",
            Supply => "supply",
            SupplyTrend => "supply_trend",
            Rent => "rent",
            Units => "units",
            Properties => "properties",
            Volume => "volume",
            Narrative => "narrative",
            Implication => "implication",
            HighlightProperty => "highlight_property",
            HighlightMetric => "highlight_metric",
            Period => "period",
            OccupancyNarrative => "occupancy_narrative",
            AbsorptionNarrative => "absorption_narrative",
            SupplyNarrative => "supply_narrative",
            RentNarrative => "rent_narrative",
            VolumeTrend => "volume_trend",
            PricePerUnit => "price_per_unit",
            CapRate => "cap_rate",
        }
    }

    pub fn from_name(name: &str) -> Option<Placeholder> {
        Placeholder::all().iter().copied().find(|p| p.name() == name)
    }

    /// Values a placeholder may be replaced with; never empty
    pub fn values(&self) -> &'static [&'static str] {
        use Placeholder::*;
        match self {
            Market => &["Houston", "Houston, TX"],
            Source => &["CoStar", "Colliers", "U.S. Census Bureau", "BLS"],
            Segment => &[
                "workforce housing",
                "Class B/C multifamily",
                "sub-institutional multifamily",
            ],
            Trend => &[
                "strengthening fundamentals",
                "improving occupancy",
                "supply-demand rebalancing",
                "continued resilience",
            ],
            Occupancy => &["90.4%", "92.1% (Class B)", "92.5% (Class C)"],
            OccupancyTrend => &[
                "up 200 bps YoY",
                "highest since 2021",
                "above long-term average",
            ],
            Absorption => &["26,510", "record annual absorption"],
            Supply => &["9,087", "declining construction pipeline"],
            SupplyTrend => &["down 34% YoY", "lowest since 2020"],
            Rent => &["$1,277/month", "$1,258/month", "$1,249/month (Class B)"],
            Units => &["143"],
            Properties => &["5"],
            Volume => &["$20M+"],
            Narrative => &[
                "market recovery and supply discipline",
                "strengthening demand against contracting supply",
            ],
            Implication => &[
                "existing assets in established submarkets are well-positioned for rent growth",
                "the supply-demand imbalance favors workforce housing owners",
            ],
            HighlightProperty => &["Avondale", "Marshall", "Moritz"],
            HighlightMetric => &["19.7% annualized", "~40% target IRR", "9.3% Year 1"],
            Period => &["Q4 2025", "Q1 2026"],
            OccupancyNarrative => &["recovered 200 basis points year-over-year to 90.4%"],
            AbsorptionNarrative => {
                &["Annual absorption of 26,510 units represented a 32.3% increase over 2024"]
            }
            SupplyNarrative => &["contracted 34% year-over-year to 9,087 units"],
            RentNarrative => &["Average effective rents held steady around $1,258-$1,277/month"],
            VolumeTrend => &["showed continued recovery"],
            PricePerUnit => &["$173,079 (all-time high)"],
            CapRate => &["5.9%"],
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.name())
    }
}
