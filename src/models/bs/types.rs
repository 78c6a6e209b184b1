use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market inputs for a single Black-Scholes evaluation.
///
/// Every field is required; the kernel never substitutes a default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// Current underlying price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub time_to_maturity: f64,
    /// Annualized continuously-compounded risk-free rate (r), as decimal
    pub risk_free_rate: f64,
    /// Annualized volatility (σ), as decimal
    pub volatility: f64,
}

impl OptionParameters {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_maturity,
            risk_free_rate,
            volatility,
        }
    }

    /// Read a single input.
    pub fn get(&self, param: Param) -> f64 {
        match param {
            Param::Spot => self.spot,
            Param::Strike => self.strike,
            Param::TimeToMaturity => self.time_to_maturity,
            Param::RiskFreeRate => self.risk_free_rate,
            Param::Volatility => self.volatility,
        }
    }

    /// Copy of `self` with one input replaced.
    pub fn with(&self, param: Param, value: f64) -> Self {
        let mut out = *self;
        match param {
            Param::Spot => out.spot = value,
            Param::Strike => out.strike = value,
            Param::TimeToMaturity => out.time_to_maturity = value,
            Param::RiskFreeRate => out.risk_free_rate = value,
            Param::Volatility => out.volatility = value,
        }
        out
    }
}

/// Identifies one field of [`OptionParameters`], used to select a sweep axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Param {
    Spot,
    Strike,
    TimeToMaturity,
    RiskFreeRate,
    Volatility,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Param::Spot => "spot",
            Param::Strike => "strike",
            Param::TimeToMaturity => "time_to_maturity",
            Param::RiskFreeRate => "risk_free_rate",
            Param::Volatility => "volatility",
        };
        f.write_str(name)
    }
}

/// European exercise right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => f.write_str("call"),
            OptionType::Put => f.write_str("put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(anyhow!("Invalid option type: {}", s)),
        }
    }
}

/// A value that differs between the call and the put.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CallPut<T> {
    pub call: T,
    pub put: T,
}

impl<T: Copy> CallPut<T> {
    pub fn get(&self, option_type: OptionType) -> T {
        match option_type {
            OptionType::Call => self.call,
            OptionType::Put => self.put,
        }
    }
}

/// First-order sensitivities for both sides of a strike.
///
/// Gamma and vega are model-symmetric and held once; delta, theta and rho are
/// held per option type. Theta is annualized, vega and rho are scaled to a
/// one-percentage-point move in volatility and rate respectively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreeksResult {
    pub delta: CallPut<f64>,
    pub gamma: f64,
    pub theta: CallPut<f64>,
    pub vega: f64,
    pub rho: CallPut<f64>,
}

impl GreeksResult {
    /// The five Greeks for one option type.
    pub fn for_type(&self, option_type: OptionType) -> OptionGreeks {
        OptionGreeks {
            delta: self.delta.get(option_type),
            gamma: self.gamma,
            theta: self.theta.get(option_type),
            vega: self.vega,
            rho: self.rho.get(option_type),
        }
    }

    /// Theta expressed per calendar day (ACT/365).
    pub fn theta_per_day(&self, option_type: OptionType) -> f64 {
        self.theta.get(option_type) / 365.0
    }
}

/// Greeks of a single option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionGreeks {
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
}
