//! Bosnian (`bs`).

use crate::data::LocaleData;
use crate::types::PluralCategory::{Few, One, Other};

pub const BS: LocaleData = LocaleData {
    id: "bs",
    decimal: ",",
    group: ".",
    minus: "-",
    percent: "%",
    per_mille: "‰",
    infinity: "∞",
    time_separator: ":",
    plurals_cardinal: &[One, Few, Other],
    plurals_ordinal: &[Other],
    plurals_range: &[One, Few, Other],
    cardinal_rules: Some(&[
        (One, "v = 0 and i % 10 = 1 and i % 100 != 11 or f % 10 = 1 and f % 100 != 11"),
        (Few, "v = 0 and i % 10 = 2..4 and i % 100 != 12..14 or f % 10 = 2..4 and f % 100 != 12..14"),
    ]),
    ordinal_rules: Some(&[]),
    range_rules: Some(&[
        (One, One, One),
        (One, Few, Few),
        (One, Other, Other),
        (Few, One, One),
        (Few, Few, Few),
        (Few, Other, Other),
        (Other, One, One),
        (Other, Few, Few),
    ]),
    number_pattern: "#,##0.###",
    percent_pattern: "#0\u{a0}%",
    currency_pattern: "#,##0.00\u{a0}¤",
    accounting_pattern: "#,##0.00\u{a0}¤",
    date_short: "d.M.yy.",
    date_medium: "d. MMM. y.",
    date_long: "d. MMMM y.",
    date_full: "EEEE, d. MMMM y.",
    time_short: "HH:mm",
    time_medium: "HH:mm:ss",
    time_long: "HH:mm:ss z",
    time_full: "HH:mm:ss zzzz",
    months_abbreviated: &[
        "",
        "jan",
        "feb",
        "mar",
        "apr",
        "maj",
        "jun",
        "jul",
        "avg",
        "sep",
        "okt",
        "nov",
        "dec",
    ],
    months_narrow: &["", "j", "f", "m", "a", "m", "j", "j", "a", "s", "o", "n", "d"],
    months_wide: &[
        "",
        "januar",
        "februar",
        "mart",
        "april",
        "maj",
        "juni",
        "juli",
        "avgust",
        "septembar",
        "oktobar",
        "novembar",
        "decembar",
    ],
    weekdays_abbreviated: &["ned", "pon", "uto", "sri", "čet", "pet", "sub"],
    weekdays_narrow: &["N", "P", "U", "S", "Č", "P", "S"],
    weekdays_short: &["ned", "pon", "uto", "sri", "čet", "pet", "sub"],
    weekdays_wide: &["nedjelja", "ponedjeljak", "utorak", "srijeda", "četvrtak", "petak", "subota"],
    periods_abbreviated: &["prijepodne", "popodne"],
    periods_narrow: &["prijepodne", "popodne"],
    periods_wide: &["prijepodne", "popodne"],
    eras_abbreviated: &["p. n. e.", "n. e."],
    eras_narrow: &["pr.n.e.", "AD"],
    eras_wide: &["prije nove ere", "nove ere"],
    timezones: &[
        ("ACDT", "Centralnoaustralijsko ljetno vrijeme"),
        ("ACST", "Centralnoaustralijsko standardno vrijeme"),
        ("ACWDT", "Australijsko centralnozapadno ljetno vrijeme"),
        ("ACWST", "Australijsko centralnozapadno standardno vrijeme"),
        ("ADT", "Sjevernoameričko atlantsko ljetno vrijeme"),
        ("AEDT", "Istočnoaustralijsko ljetno vrijeme"),
        ("AEST", "Istočnoaustralijsko standardno vrijeme"),
        ("AKDT", "Aljaskansko ljetno vrijeme"),
        ("AKST", "Aljaskansko standardno vrijeme"),
        ("ARST", "Argentinsko ljetno vrijeme"),
        ("ART", "Argentinsko standardno vrijeme"),
        ("AST", "Sjevernoameričko atlantsko standardno vrijeme"),
        ("AWDT", "Zapadnoaustralijsko ljetno vrijeme"),
        ("AWST", "Zapadnoaustralijsko standardno vrijeme"),
        ("BOT", "Bolivijsko vrijeme"),
        ("BT", "Butansko vrijeme"),
        ("CAT", "Centralnoafričko vrijeme"),
        ("CDT", "Sjevernoameričko centralno ljetno vrijeme"),
        ("CHADT", "Čatamsko ljetno vrijeme"),
        ("CHAST", "Čatamsko standardno vrijeme"),
        ("CLST", "Čileansko ljetno vrijeme"),
        ("CLT", "Čileansko standardno vrijeme"),
        ("COST", "Kolumbijsko ljetno vrijeme"),
        ("COT", "Kolumbijsko standardno vrijeme"),
        ("CST", "Sjevernoameričko centralno standardno vrijeme"),
        ("ChST", "Čamorsko standardno vrijeme"),
        ("EAT", "Istočnoafričko vrijeme"),
        ("ECT", "Ekvadorsko vrijeme"),
        ("EDT", "Sjevernoameričko istočno ljetno vrijeme"),
        ("EST", "Sjevernoameričko istočno standardno vrijeme"),
        ("GFT", "Francuskogvajansko vrijeme"),
        ("GMT", "Griničko vrijeme"),
        ("GYT", "Gvajansko vrijeme"),
        ("HADT", "Havajsko-aleućansko ljetno vrijeme"),
        ("HAST", "Havajsko-aleućansko standardno vrijeme"),
        ("HAT", "Njufaundlendsko ljetno vrijeme"),
        ("HECU", "Kubansko ljetno vrijeme"),
        ("HEEG", "Istočnogrenlandsko ljetno vrijeme"),
        ("HENOMX", "Sjeverozapadno meksičko ljetno vrijeme"),
        ("HEOG", "Zapadnogrenlandsko ljetno vrijeme"),
        ("HEPM", "Ljetno vrijeme na Ostrvima Sen Pjer i Mikelon"),
        ("HEPMX", "Meksičko pacifičko ljetno vrijeme"),
        ("HKST", "Hongkonško ljetno vrijeme"),
        ("HKT", "Hongkonško standardno vrijeme"),
        ("HNCU", "Kubansko standardno vrijeme"),
        ("HNEG", "Istočnogrenlandsko standardno vrijeme"),
        ("HNNOMX", "Sjeverozapadno meksičko standardno vrijeme"),
        ("HNOG", "Zapadnogrenlandsko standardno vrijeme"),
        ("HNPM", "Standardno vrijeme na Ostrvima Sen Pjer i Mikelon"),
        ("HNPMX", "Meksičko pacifičko standardno vrijeme"),
        ("HNT", "Njufaundlendsko standardno vrijeme"),
        ("IST", "Indijsko standardno vrijeme"),
        ("JDT", "Japansko ljetno vrijeme"),
        ("JST", "Japansko standardno vrijeme"),
        ("LHDT", "Ljetno vrijeme na Ostrvu Lord Hau"),
        ("LHST", "Standardno vrijeme na Ostrvu Lord Hau"),
        ("MDT", "Makao letnje računanje vremena"),
        ("MESZ", "Centralnoevropsko ljetno vrijeme"),
        ("MEZ", "Centralnoevropsko standardno vrijeme"),
        ("MST", "Makao standardno vreme"),
        ("MYT", "Malezijsko vrijeme"),
        ("NZDT", "Novozelandsko ljetno vrijeme"),
        ("NZST", "Novozelandsko standardno vrijeme"),
        ("OESZ", "Istočnoevropsko ljetno vrijeme"),
        ("OEZ", "Istočnoevropsko standardno vrijeme"),
        ("PDT", "Sjevernoameričko pacifičko ljetno vrijeme"),
        ("PST", "Sjevernoameričko pacifičko standardno vrijeme"),
        ("SAST", "Južnoafričko standardno vrijeme"),
        ("SGT", "Singapursko standardno vrijeme"),
        ("SRT", "Surinamsko vrijeme"),
        ("TMST", "Turkmenistansko ljetno vrijeme"),
        ("TMT", "Turkmenistansko standardno vrijeme"),
        ("UYST", "Urugvajsko ljetno vrijeme"),
        ("UYT", "Urugvajsko standardno vrijeme"),
        ("VET", "Venecuelansko vrijeme"),
        ("WARST", "Zapadnoargentinsko ljetno vrijeme"),
        ("WART", "Zapadnoargentinsko standardno vrijeme"),
        ("WAST", "Zapadnoafričko ljetno vrijeme"),
        ("WAT", "Zapadnoafričko standardno vrijeme"),
        ("WESZ", "Zapadnoevropsko ljetno vrijeme"),
        ("WEZ", "Zapadnoevropsko standardno vrijeme"),
        ("WIB", "Zapadnoindonezijsko vrijeme"),
        ("WIT", "Istočnoindonezijsko vrijeme"),
        ("WITA", "Centralnoindonezijsko vrijeme"),
        ("∅∅∅", "Peruansko ljetno vrijeme"),
    ],
    currency_symbols: &[
        "ADP",
        "AED",
        "AFA",
        "AFN",
        "ALK",
        "ALL",
        "AMD",
        "ANG",
        "AOA",
        "AOK",
        "AON",
        "AOR",
        "ARA",
        "ARL",
        "ARM",
        "ARP",
        "ARS",
        "ATS",
        "AUD",
        "AWG",
        "AZM",
        "AZN",
        "BAD",
        "KM",
        "BAN",
        "BBD",
        "BDT",
        "BEC",
        "BEF",
        "BEL",
        "BGL",
        "BGM",
        "BGN",
        "BGO",
        "BHD",
        "BIF",
        "BMD",
        "BND",
        "BOB",
        "BOL",
        "BOP",
        "BOV",
        "BRB",
        "BRC",
        "BRE",
        "BRL",
        "BRN",
        "BRR",
        "BRZ",
        "BSD",
        "BTN",
        "BUK",
        "BWP",
        "BYB",
        "BYN",
        "BYR",
        "BZD",
        "CAD",
        "CDF",
        "CHE",
        "CHF",
        "CHW",
        "CLE",
        "CLF",
        "CLP",
        "CNX",
        "CNY",
        "COP",
        "COU",
        "CRC",
        "CSD",
        "CSK",
        "CUC",
        "CUP",
        "CVE",
        "CYP",
        "CZK",
        "DDM",
        "DEM",
        "DJF",
        "DKK",
        "DOP",
        "DZD",
        "ECS",
        "ECV",
        "EEK",
        "EGP",
        "ERN",
        "ESA",
        "ESB",
        "ESP",
        "ETB",
        "€",
        "FIM",
        "FJD",
        "FKP",
        "FRF",
        "GBP",
        "GEK",
        "GEL",
        "GHC",
        "GHS",
        "GIP",
        "GMD",
        "GNF",
        "GNS",
        "GQE",
        "GRD",
        "GTQ",
        "GWE",
        "GWP",
        "GYD",
        "HKD",
        "HNL",
        "HRD",
        "kn",
        "HTG",
        "HUF",
        "IDR",
        "IEP",
        "ILP",
        "ILR",
        "ILS",
        "₹",
        "IQD",
        "IRR",
        "ISJ",
        "ISK",
        "ITL",
        "JMD",
        "JOD",
        "¥",
        "KES",
        "KGS",
        "KHR",
        "KMF",
        "KPW",
        "KRH",
        "KRO",
        "₩",
        "KWD",
        "KYD",
        "KZT",
        "LAK",
        "LBP",
        "LKR",
        "LRD",
        "LSL",
        "LTL",
        "LTT",
        "LUC",
        "LUF",
        "LUL",
        "LVL",
        "LVR",
        "LYD",
        "MAD",
        "MAF",
        "MCF",
        "MDC",
        "MDL",
        "MGA",
        "MGF",
        "MKD",
        "MKN",
        "MLF",
        "MMK",
        "MNT",
        "MOP",
        "MRO",
        "MTL",
        "MTP",
        "MUR",
        "MVP",
        "MVR",
        "MWK",
        "MXN",
        "MXP",
        "MXV",
        "MYR",
        "MZE",
        "MZM",
        "MZN",
        "NAD",
        "NGN",
        "NIC",
        "NIO",
        "NLG",
        "NOK",
        "NPR",
        "NZD",
        "OMR",
        "PAB",
        "PEI",
        "PEN",
        "PES",
        "PGK",
        "PHP",
        "PKR",
        "PLN",
        "PLZ",
        "PTE",
        "PYG",
        "QAR",
        "RHD",
        "ROL",
        "RON",
        "din.",
        "RUB",
        "RUR",
        "RWF",
        "SAR",
        "SBD",
        "SCR",
        "SDD",
        "SDG",
        "SDP",
        "SEK",
        "SGD",
        "SHP",
        "SIT",
        "SKK",
        "SLL",
        "SOS",
        "SRD",
        "SRG",
        "SSP",
        "STD",
        "SUR",
        "SVC",
        "SYP",
        "SZL",
        "฿",
        "TJR",
        "TJS",
        "TMM",
        "TMT",
        "TND",
        "TOP",
        "TPE",
        "TRL",
        "TRY",
        "TTD",
        "NT$",
        "TZS",
        "UAH",
        "UAK",
        "UGS",
        "UGX",
        "USD",
        "USN",
        "USS",
        "UYI",
        "UYP",
        "UYU",
        "UZS",
        "VEB",
        "VEF",
        "₫",
        "VNN",
        "VUV",
        "WST",
        "FCFA",
        "XAG",
        "XAU",
        "XBA",
        "XBB",
        "XBC",
        "XBD",
        "XCD",
        "XDR",
        "XEU",
        "XFO",
        "XFU",
        "CFA",
        "XPD",
        "XPF",
        "XPT",
        "XRE",
        "XSU",
        "XTS",
        "XUA",
        "XXX",
        "YDD",
        "YER",
        "YUD",
        "YUM",
        "YUN",
        "YUR",
        "ZAL",
        "ZAR",
        "ZMK",
        "ZMW",
        "ZRN",
        "ZRZ",
        "ZWD",
        "ZWL",
        "ZWR",
    ],
};
