//! Template library, one set per content type
//!
//! A generated body is one opening, one body and one closing concatenated.
//! Fragments carry their own leading/trailing line breaks.

use crate::store::ContentType;

/// Opening, body and closing variants for one content type
#[derive(Debug)]
pub struct TemplateSet {
    pub openings: &'static [&'static str],
    pub bodies: &'static [&'static str],
    pub closings: &'static [&'static str],
}

impl TemplateSet {
    /// Every fragment in the set
    pub fn fragments(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.openings
            .iter()
            .chain(self.bodies)
            .chain(self.closings)
            .copied()
    }
}

/// Template set used for `content_type`
pub fn templates_for(content_type: ContentType) -> &'static TemplateSet {
    match content_type {
        ContentType::BlogPost => &BLOG_POST,
        ContentType::LinkedinPost => &LINKEDIN_POST,
        ContentType::MarketReport => &MARKET_REPORT,
    }
}

static BLOG_POST: TemplateSet = TemplateSet {
    openings: &[
        "Houston's multifamily market continues to demonstrate {trend} as we analyze the latest data from {source}.",
        "The latest market data paints a compelling picture for workforce housing investors in {market}.",
        "As {market}'s multifamily fundamentals strengthen, disciplined investors are finding opportunity in {segment}.",
        "New data from {source} confirms what we've observed on the ground: {market}'s workforce housing segment is {trend}.",
    ],
    bodies: &[
        "\n\nKey Market Metrics:\n- Occupancy: {occupancy}\n- Annual Absorption: {absorption}\n- Supply Pipeline: {supply}\n- Average Effective Rent: {rent}\n\nThese numbers tell a story of {narrative}. For investors focused on workforce housing, the implications are clear: {implication}.\n\n",
        "\n\nOur portfolio of {units} units across {properties} properties continues to perform well, with {highlight_property} delivering {highlight_metric} returns.\n\nThe thesis remains straightforward: acquire well-located workforce housing at a meaningful discount to replacement cost, implement our operational playbook, and generate durable cash flow for our investors.\n\n",
        "\n\nThe sub-institutional advantage continues to create opportunity. Deals between $5-20M face limited institutional competition, allowing operators like us to source proprietary opportunities with favorable pricing.\n\nOur approach:\n1. Conservative leverage with fixed-rate debt preference\n2. GP co-investment of 5-10% alongside LPs\n3. Hands-on asset management and repositioning\n4. Focus on durable cash flow over speculative appreciation\n\n",
    ],
    closings: &[
        "\nFor disciplined investors focused on risk-adjusted returns, {market}'s workforce housing segment offers a compelling combination of durability, cash flow, and long-term appreciation potential.\n\nFor informational purposes only. Past performance is not indicative of future results.",
        "\nThe fundamentals support continued conviction in our Sunbelt thesis. We remain actively acquiring in {market} and look forward to sharing more insights as the data evolves.\n\nPast performance is not indicative of future results.",
        "\nAs always, our focus remains on downside protection, durable cash flow, and disciplined execution. The data confirms we're in the right markets with the right strategy.\n\nFor informational purposes only. This does not constitute investment advice.",
    ],
};

static LINKEDIN_POST: TemplateSet = TemplateSet {
    openings: &[
        "Houston just posted another strong quarter for multifamily fundamentals.",
        "The latest {source} data is in, and the numbers reinforce our workforce housing thesis.",
        "Here's what's happening in {market}'s multifamily market right now:",
        "Workforce housing demand remains resilient. Here's why:",
    ],
    bodies: &[
        "\n\nThe numbers:\n- {occupancy} occupancy ({occupancy_trend})\n- {absorption} units absorbed\n- {supply} units under construction ({supply_trend})\n- {rent} average effective rent\n\n",
        "\n\nAt RC Investment Properties:\n- {units} units across {properties} properties\n- {volume} in transaction volume\n- GP co-invest of 5-10% in every deal\n- 100% proprietary sourcing\n\n",
        "\n\nWhy we're bullish on workforce housing:\n1. Class B/C occupancy above 92%\n2. New supply declining 34% YoY\n3. Migration-driven demand adding 200K+ residents annually\n4. Acquisition basis well below replacement cost\n\n",
    ],
    closings: &[
        "\n#MultifamilyInvesting #WorkforceHousing #HoustonRealEstate\n\nFor informational purposes only.",
        "\nThe structural tailwinds remain intact.\n\n#RealEstateInvesting #SunbeltMarkets #MultifamilyHousing\n\nFor informational purposes only. Past performance is not indicative of future results.",
        "\n#Houston #MultifamilyInvesting #WorkforceHousing\n\nFor informational purposes only.",
    ],
};

static MARKET_REPORT: TemplateSet = TemplateSet {
    openings: &[
        "This quarterly report examines {market}'s multifamily market performance using the latest available data from {source}.",
        "{market} Multifamily Market Report: {period}\n\nExecutive Summary: {market}'s multifamily fundamentals showed {trend} during {period}.",
    ],
    bodies: &[
        "\n\nMarket Overview:\n\nOccupancy: {occupancy}\nThe market {occupancy_narrative}.\n\nAbsorption: {absorption}\n{absorption_narrative}.\n\nSupply: {supply}\nThe construction pipeline {supply_narrative}.\n\nRent Trends: {rent}\n{rent_narrative}.\n\nInvestment Activity:\nTransaction volume {volume_trend}. Average price per unit reached {price_per_unit}. Cap rates averaged {cap_rate}.\n\n",
        "\n\nSubmarket Performance:\n\nHouston's workforce housing submarkets showed varied performance:\n- Class B: 92.1% occupancy, $1,249/month average rent\n- Class C: 92.5% occupancy, $982/month average rent\n\nBoth segments outperformed Class A (86.1% occupancy) by more than 600 basis points, reinforcing the structural demand advantage in workforce housing.\n\n",
    ],
    closings: &[
        "\n\nOutlook:\nWe expect {market}'s multifamily fundamentals to continue strengthening as the market absorbs remaining lease-up inventory and the construction pipeline contracts further.\n\nFor informational purposes only. This report does not constitute investment advice. Past performance is not indicative of future results.",
        "\n\nConclusion:\nThe data supports a constructive outlook for workforce housing in {market}. Disciplined investors with operational capability are well-positioned to capitalize on improving fundamentals.\n\nFor informational purposes only.",
    ],
};
