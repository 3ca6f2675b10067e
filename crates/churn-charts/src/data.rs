// File: crates/churn-charts/src/data.rs
// Summary: Hardcoded result tables from the churn analysis, plus the figures derived from them.

/// Customer count per predicted churn-probability band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiskTier {
    pub name: &'static str,
    pub band: &'static str,
    pub count: u32,
    pub high_risk: bool,
}

impl RiskTier {
    /// Two-line axis label, e.g. "Low\n(0-25%)".
    pub fn tick_label(&self) -> String {
        format!("{}\n({})", self.name, self.band)
    }
}

pub const RISK_TIERS: [RiskTier; 4] = [
    RiskTier { name: "Low", band: "0-25%", count: 1850, high_risk: false },
    RiskTier { name: "Medium", band: "25-50%", count: 1325, high_risk: false },
    RiskTier { name: "High", band: "50-75%", count: 1675, high_risk: true },
    RiskTier { name: "Critical", band: "75-100%", count: 1150, high_risk: true },
];

pub const TOTAL_CUSTOMERS: u32 = 6000;
/// Customer lifetime value held by the high-risk tiers, in dollars.
pub const CLV_AT_RISK: f64 = 2_542_079.0;

pub fn total_customers() -> u32 {
    RISK_TIERS.iter().map(|t| t.count).sum()
}

pub fn high_risk_customers() -> u32 {
    RISK_TIERS.iter().filter(|t| t.high_risk).map(|t| t.count).sum()
}

/// `count` as a percentage of all customers.
pub fn customer_share(count: u32) -> f64 {
    count as f64 / total_customers() as f64 * 100.0
}

/// Classifier quality at one decision threshold (precision/recall in %).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdRow {
    pub threshold: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

pub const THRESHOLDS: [ThresholdRow; 5] = [
    ThresholdRow { threshold: 0.3, precision: 23.2, recall: 96.0, f1: 0.374 },
    ThresholdRow { threshold: 0.4, precision: 24.9, recall: 84.9, f1: 0.386 },
    ThresholdRow { threshold: 0.5, precision: 29.3, recall: 66.3, f1: 0.406 },
    ThresholdRow { threshold: 0.6, precision: 34.5, recall: 35.3, f1: 0.349 },
    ThresholdRow { threshold: 0.7, precision: 45.9, recall: 26.6, f1: 0.337 },
];

/// Row with the highest F1; this is the operating threshold.
pub fn selected_threshold() -> ThresholdRow {
    THRESHOLDS.iter().copied().fold(THRESHOLDS[0], |best, r| if r.f1 > best.f1 { r } else { best })
}

/// Model coefficient and how easily the business can move the feature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureWeight {
    pub name: &'static str,
    pub coefficient: f64,
    pub actionability: f64,
}

impl FeatureWeight {
    pub fn combined(&self) -> f64 {
        self.coefficient * self.actionability
    }
}

pub const FEATURES: [FeatureWeight; 8] = [
    FeatureWeight { name: "tenure_months", coefficient: 0.50, actionability: 1.0 },
    FeatureWeight { name: "support_tickets_90d", coefficient: 0.19, actionability: 2.0 },
    FeatureWeight { name: "engagement_score", coefficient: 0.18, actionability: 3.0 },
    FeatureWeight { name: "feature_usage_pct", coefficient: 0.16, actionability: 3.0 },
    FeatureWeight { name: "payment_delays", coefficient: 0.14, actionability: 1.5 },
    FeatureWeight { name: "monthly_charges", coefficient: 0.12, actionability: 1.0 },
    FeatureWeight { name: "nps_score", coefficient: 0.10, actionability: 2.5 },
    FeatureWeight { name: "is_inactive", coefficient: 0.08, actionability: 2.0 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuadrantCategory {
    PriorityTarget,
    QuickWin,
    LowPriority,
    Monitor,
    Accept,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadrantFeature {
    pub name: &'static str,
    pub importance: f64,
    pub actionability: f64,
    pub category: QuadrantCategory,
}

pub const QUADRANT_FEATURES: [QuadrantFeature; 8] = [
    QuadrantFeature { name: "engagement_score", importance: 0.18, actionability: 0.90, category: QuadrantCategory::PriorityTarget },
    QuadrantFeature { name: "feature_usage_pct", importance: 0.16, actionability: 0.85, category: QuadrantCategory::PriorityTarget },
    QuadrantFeature { name: "nps_score", importance: 0.10, actionability: 0.75, category: QuadrantCategory::QuickWin },
    QuadrantFeature { name: "support_tickets_90d", importance: 0.19, actionability: 0.60, category: QuadrantCategory::PriorityTarget },
    QuadrantFeature { name: "is_inactive", importance: 0.08, actionability: 0.55, category: QuadrantCategory::QuickWin },
    QuadrantFeature { name: "payment_delays", importance: 0.14, actionability: 0.40, category: QuadrantCategory::Monitor },
    QuadrantFeature { name: "tenure_months", importance: 0.50, actionability: 0.15, category: QuadrantCategory::Accept },
    QuadrantFeature { name: "monthly_charges", importance: 0.12, actionability: 0.20, category: QuadrantCategory::Monitor },
];

pub const IMPORTANCE_SPLIT: f64 = 0.15;
pub const ACTIONABILITY_SPLIT: f64 = 0.5;

/// One normal component of the predicted days-until-churn sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingCluster {
    pub mean: f64,
    pub std_dev: f64,
    pub n: usize,
}

pub const TIMING_CLUSTERS: [TimingCluster; 3] = [
    TimingCluster { mean: 93.0, std_dev: 3.0, n: 2000 },
    TimingCluster { mean: 85.0, std_dev: 5.0, n: 500 },
    TimingCluster { mean: 100.0, std_dev: 4.0, n: 325 },
];

/// Observed range of predicted days; samples are clipped to it.
pub const TIMING_RANGE: (f64, f64) = (30.0, 120.0);
pub const TIMING_BIN_DAYS: f64 = 3.0;
/// Days 45..95: customer is receptive and has not decided to leave.
pub const OPTIMAL_WINDOW: (f64, f64) = (45.0, 95.0);
pub const PEAK_DAY: f64 = 93.0;

/// Revenue outcome by intervention timing, in $K.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevenueZone {
    pub name: &'static str,
    pub days: &'static str,
    pub potential: f64,
    pub protected: f64,
}

impl RevenueZone {
    pub fn tick_label(&self) -> String {
        format!("{}\n({})", self.name, self.days)
    }

    /// Protected share of potential value, in %.
    pub fn efficiency(&self) -> f64 {
        self.protected / self.potential * 100.0
    }
}

pub const REVENUE_ZONES: [RevenueZone; 3] = [
    RevenueZone { name: "Too Early", days: "Day 0-45", potential: 400.0, protected: 180.0 },
    RevenueZone { name: "Optimal", days: "Day 45-95", potential: 264.0, protected: 264.0 },
    RevenueZone { name: "Too Late", days: "Day 95+", potential: 150.0, protected: 45.0 },
];

/// One arm of the retention A/B test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AbVariant {
    pub name: &'static str,
    /// Churn rate in %.
    pub churn_rate: f64,
    /// `None` for the control arm.
    pub p_value: Option<f64>,
    pub significant: bool,
}

impl AbVariant {
    /// Relative churn reduction against `baseline`, in %.
    pub fn lift(&self, baseline: f64) -> f64 {
        (baseline - self.churn_rate) / baseline * 100.0
    }
}

pub const AB_VARIANTS: [AbVariant; 5] = [
    AbVariant { name: "Control", churn_rate: 21.7, p_value: None, significant: false },
    AbVariant { name: "Email", churn_rate: 17.6, p_value: Some(0.033), significant: false },
    AbVariant { name: "Discount", churn_rate: 15.6, p_value: Some(0.001), significant: true },
    AbVariant { name: "Call", churn_rate: 9.9, p_value: Some(0.0001), significant: true },
    AbVariant { name: "Combined", churn_rate: 15.0, p_value: Some(0.0005), significant: true },
];

/// Four treatment arms compared against control.
pub const BONFERRONI_ALPHA: f64 = 0.05 / 4.0;
pub const CUSTOMERS_PER_ARM: u32 = 900;

pub fn control() -> AbVariant {
    AB_VARIANTS[0]
}

/// Significant arm with the lowest churn rate.
pub fn winning_variant() -> Option<(usize, AbVariant)> {
    AB_VARIANTS
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, v)| v.significant)
        .min_by(|a, b| a.1.churn_rate.total_cmp(&b.1.churn_rate))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelRoi {
    pub channel: &'static str,
    /// Return multiple on intervention cost.
    pub roi: f64,
    pub cost_per_customer: f64,
}

pub const CHANNEL_ROI: [ChannelRoi; 4] = [
    ChannelRoi { channel: "Email", roi: 158.8, cost_per_customer: 0.50 },
    ChannelRoi { channel: "Discount", roi: 11.8, cost_per_customer: 10.00 },
    ChannelRoi { channel: "Call", roi: 6.5, cost_per_customer: 35.00 },
    ChannelRoi { channel: "Combined", roi: 2.8, cost_per_customer: 45.50 },
];

pub fn best_roi() -> ChannelRoi {
    CHANNEL_ROI.iter().copied().fold(CHANNEL_ROI[0], |best, c| if c.roi > best.roi { c } else { best })
}

/// How many times `a`'s ROI exceeds `b`'s.
pub fn roi_ratio(a: &str, b: &str) -> Option<f64> {
    let find = |name: &str| CHANNEL_ROI.iter().find(|c| c.channel == name).map(|c| c.roi);
    Some(find(a)? / find(b)?)
}

/// Absolute churn reduction (percentage points) next to ROI for each channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelLift {
    pub channel: &'static str,
    pub lift_pp: f64,
    pub roi: f64,
}

pub const CHANNEL_LIFT: [ChannelLift; 4] = [
    ChannelLift { channel: "Email", lift_pp: 4.1, roi: 158.8 },
    ChannelLift { channel: "Discount", lift_pp: 6.1, roi: 11.8 },
    ChannelLift { channel: "Call", lift_pp: 11.8, roi: 6.5 },
    ChannelLift { channel: "Combined", lift_pp: 6.7, roi: 2.8 },
];

/// Gating metrics reported on the executive summary.
pub const CLASSIFICATION_AUC: f64 = 0.6612;
pub const SURVIVAL_C_INDEX: f64 = 0.6645;
pub const CUSTOMERS_SAVED: u32 = 137;
/// Revenue protected by optimally timed outreach, in $K.
pub const REVENUE_PROTECTED_K: f64 = 264.0;
