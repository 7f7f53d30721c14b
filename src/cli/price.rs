//! Price command implementation

use crate::config::Config;
use crate::model::{
    time_to_expiration_str, BlackScholes, OptionKind, PricingInputs, PricingModel,
};
use clap::{Args, ValueEnum};

/// Option right as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Call,
    Put,
}

impl From<KindArg> for OptionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Call => OptionKind::Call,
            KindArg::Put => OptionKind::Put,
        }
    }
}

#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Call or put
    #[arg(short, long, value_enum)]
    pub kind: KindArg,

    /// Underlying spot price
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Annualized volatility
    #[arg(long)]
    pub vol: f64,

    /// Risk-free rate (defaults to the configured rate)
    #[arg(short, long)]
    pub rate: Option<f64>,

    /// Time to expiration in years
    #[arg(short, long, conflicts_with = "expiration", required_unless_present = "expiration")]
    pub time: Option<f64>,

    /// Expiration date (YYYY-MM-DD)
    #[arg(short, long)]
    pub expiration: Option<String>,

    /// Reference date for --expiration (defaults to the configured date)
    #[arg(short, long, requires = "expiration")]
    pub date: Option<String>,
}

impl PriceArgs {
    /// Pricing inputs after applying config defaults
    pub fn inputs(&self, config: &Config) -> anyhow::Result<PricingInputs> {
        let time = match (self.time, &self.expiration) {
            (Some(t), _) => t,
            (None, Some(expiration)) => {
                let reference = self
                    .date
                    .as_deref()
                    .unwrap_or(config.scan.reference_date.as_str());
                time_to_expiration_str(expiration, reference)?
            }
            (None, None) => anyhow::bail!("either --time or --expiration is required"),
        };

        let inputs = PricingInputs {
            spot: self.spot,
            strike: self.strike,
            volatility: self.vol,
            rate: self.rate.unwrap_or(config.scan.rate),
            time,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let inputs = self.inputs(config)?;
        let kind = OptionKind::from(self.kind);
        let price = BlackScholes::new().price(kind, &inputs);

        tracing::debug!(?inputs, %kind, price, "Priced option");
        println!("{} price: {:.6}", kind, price);
        Ok(())
    }
}
