//! ISO 4217 currency codes.
//!
//! The enumeration is closed and alphabetical. A variant's index is its
//! position in every locale's currency symbol table.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::suggest::compute_suggestions;

/// Error returned when parsing a currency code that is not in [`Currency::VARIANTS`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown currency code '{code}'")]
pub struct UnknownCurrency {
    pub code: String,
    pub suggestions: Vec<String>,
}

macro_rules! currencies {
    ($($code:ident,)+) => {
        /// A currency, identified by its ISO 4217 code.
        #[expect(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[repr(u16)]
        pub enum Currency {
            $($code,)+
        }

        impl Currency {
            /// Every currency, in index order.
            pub const VARIANTS: &'static [Currency] = &[$(Currency::$code,)+];

            /// Every ISO code, in index order.
            pub const CODES: &'static [&'static str] = &[$(stringify!($code),)+];
        }
    };
}

currencies! {
    ADP, AED, AFA, AFN, ALK, ALL, AMD, ANG, AOA, AOK, AON, AOR, ARA, ARL,
    ARM, ARP, ARS, ATS, AUD, AWG, AZM, AZN, BAD, BAM, BAN, BBD, BDT, BEC,
    BEF, BEL, BGL, BGM, BGN, BGO, BHD, BIF, BMD, BND, BOB, BOL, BOP, BOV,
    BRB, BRC, BRE, BRL, BRN, BRR, BRZ, BSD, BTN, BUK, BWP, BYB, BYN, BYR,
    BZD, CAD, CDF, CHE, CHF, CHW, CLE, CLF, CLP, CNX, CNY, COP, COU, CRC,
    CSD, CSK, CUC, CUP, CVE, CYP, CZK, DDM, DEM, DJF, DKK, DOP, DZD, ECS,
    ECV, EEK, EGP, ERN, ESA, ESB, ESP, ETB, EUR, FIM, FJD, FKP, FRF, GBP,
    GEK, GEL, GHC, GHS, GIP, GMD, GNF, GNS, GQE, GRD, GTQ, GWE, GWP, GYD,
    HKD, HNL, HRD, HRK, HTG, HUF, IDR, IEP, ILP, ILR, ILS, INR, IQD, IRR,
    ISJ, ISK, ITL, JMD, JOD, JPY, KES, KGS, KHR, KMF, KPW, KRH, KRO, KRW,
    KWD, KYD, KZT, LAK, LBP, LKR, LRD, LSL, LTL, LTT, LUC, LUF, LUL, LVL,
    LVR, LYD, MAD, MAF, MCF, MDC, MDL, MGA, MGF, MKD, MKN, MLF, MMK, MNT,
    MOP, MRO, MTL, MTP, MUR, MVP, MVR, MWK, MXN, MXP, MXV, MYR, MZE, MZM,
    MZN, NAD, NGN, NIC, NIO, NLG, NOK, NPR, NZD, OMR, PAB, PEI, PEN, PES,
    PGK, PHP, PKR, PLN, PLZ, PTE, PYG, QAR, RHD, ROL, RON, RSD, RUB, RUR,
    RWF, SAR, SBD, SCR, SDD, SDG, SDP, SEK, SGD, SHP, SIT, SKK, SLL, SOS,
    SRD, SRG, SSP, STD, SUR, SVC, SYP, SZL, THB, TJR, TJS, TMM, TMT, TND,
    TOP, TPE, TRL, TRY, TTD, TWD, TZS, UAH, UAK, UGS, UGX, USD, USN, USS,
    UYI, UYP, UYU, UZS, VEB, VEF, VND, VNN, VUV, WST, XAF, XAG, XAU, XBA,
    XBB, XBC, XBD, XCD, XDR, XEU, XFO, XFU, XOF, XPD, XPF, XPT, XRE, XSU,
    XTS, XUA, XXX, YDD, YER, YUD, YUM, YUN, YUR, ZAL, ZAR, ZMK, ZMW, ZRN,
    ZRZ, ZWD, ZWL, ZWR,
}

impl Currency {
    /// The three-letter ISO code.
    pub fn code(self) -> &'static str {
        Currency::CODES[self.index()]
    }

    /// Position of this currency in a locale's symbol table.
    pub fn index(self) -> usize {
        usize::from(self as u16)
    }

    /// Looks up a currency by table position.
    pub fn from_index(index: usize) -> Option<Currency> {
        Currency::VARIANTS.get(index).copied()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    /// Parses a code case-insensitively (`"usd"`, `"USD"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Currency::CODES
            .binary_search(&upper.as_str())
            .map(|index| Currency::VARIANTS[index])
            .map_err(|_| UnknownCurrency {
                code: s.to_string(),
                suggestions: compute_suggestions(&upper, Currency::CODES),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_positions() {
        for (index, currency) in Currency::VARIANTS.iter().enumerate() {
            assert_eq!(currency.index(), index);
        }
        assert_eq!(Currency::VARIANTS.len(), 298);
        assert_eq!(Currency::ADP.index(), 0);
        assert_eq!(Currency::ZWR.index(), 297);
    }

    #[test]
    fn lek_variant_is_not_shadowed() {
        assert_eq!(Currency::ALL.code(), "ALL");
        assert_eq!(Currency::ALL.index(), 5);
        assert_eq!(Currency::VARIANTS[5], Currency::ALL);
        assert_eq!("all".parse::<Currency>(), Ok(Currency::ALL));
    }

    #[test]
    fn codes_are_sorted() {
        assert!(Currency::CODES.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Currency::USD.code(), "USD");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("usd".parse::<Currency>(), Ok(Currency::USD));
        assert_eq!(" EUR ".parse::<Currency>(), Ok(Currency::EUR));
    }

    #[test]
    fn unknown_code_suggests_neighbours() {
        let err = "USX".parse::<Currency>().unwrap_err();
        assert_eq!(err.code, "USX");
        assert!(err.suggestions.contains(&"USD".to_string()));
        assert!(err.suggestions.len() <= 3);
    }
}
