use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Viewport tier used to select among alternative property values.
///
/// Mobile is the universal fallback default: a responsive map with no
/// entry for the requested tier falls back to its mobile entry first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    /// Ascending order; also the scan order when resolving a responsive
    /// map that has neither the requested tier nor a mobile entry.
    pub const ORDER: [Breakpoint; 3] =
        [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop];

    /// Minimum viewport width (px) for the tablet tier.
    pub const TABLET_MIN_WIDTH: u32 = 768;

    /// Minimum viewport width (px) for the desktop tier.
    pub const DESKTOP_MIN_WIDTH: u32 = 1024;

    /// Map a live viewport width to its tier.
    pub fn from_width(width: u32) -> Self {
        if width >= Self::DESKTOP_MIN_WIDTH {
            Breakpoint::Desktop
        } else if width >= Self::TABLET_MIN_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Mobile
        }
    }

    /// The wire name of this tier, as used for responsive map keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        }
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Breakpoint::Mobile
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobile" => Ok(Breakpoint::Mobile),
            "tablet" => Ok(Breakpoint::Tablet),
            "desktop" => Ok(Breakpoint::Desktop),
            other => Err(format!(
                "Invalid breakpoint: {}. Use: mobile, tablet, or desktop",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_thresholds() {
        assert_eq!(Breakpoint::from_width(0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(767), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(768), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1023), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1024), Breakpoint::Desktop);
        assert_eq!(Breakpoint::from_width(1920), Breakpoint::Desktop);
    }

    #[test]
    fn test_wire_names_round_trip() {
        for bp in Breakpoint::ORDER {
            assert_eq!(bp.as_str().parse::<Breakpoint>(), Ok(bp));
            let json = serde_json::to_string(&bp).unwrap();
            assert_eq!(json, format!("\"{}\"", bp.as_str()));
            let back: Breakpoint = serde_json::from_str(&json).unwrap();
            assert_eq!(back, bp);
        }
    }

    #[test]
    fn test_order_is_ascending() {
        assert!(Breakpoint::Mobile < Breakpoint::Tablet);
        assert!(Breakpoint::Tablet < Breakpoint::Desktop);
        assert_eq!(Breakpoint::ORDER[0], Breakpoint::default());
    }

    #[test]
    fn test_rejects_unknown_name() {
        assert!("widescreen".parse::<Breakpoint>().is_err());
    }
}
