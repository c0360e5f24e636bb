// DO NOT EDIT THIS FILE. IT WAS AUTOMATICALLY GENERATED FROM THE UNICODE CHARACTER DATABASE.
//
// Unicode version: 17.0.0.
//
// Source: PropertyAliases.txt, PropertyValueAliases.txt

//! Alias tables. The `_` entry maps property name aliases to canonical property identifiers,
//! every other entry maps value aliases of one property to its canonical value-keys.

pub(crate) const ALIASES: &[(&str, &[(&str, &str)])] = &[
    (
        "_",
        &[
            ("ea", "eastasianwidth"),
            ("gcb", "graphemeclusterbreak"),
            ("nt", "numerictype"),
            ("nv", "numericvalue"),
            ("sb", "sentencebreak"),
            ("wb", "wordbreak"),
        ],
    ),
    (
        "eastasianwidth",
        &[
            ("a", "ambiguous"),
            ("f", "fullwidth"),
            ("h", "halfwidth"),
            ("n", "neutral"),
            ("na", "narrow"),
            ("w", "wide"),
        ],
    ),
    (
        "graphemeclusterbreak",
        &[
            ("cn", "control"),
            ("eb", "ebase"),
            ("ebg", "ebasegaz"),
            ("em", "emodifier"),
            ("ex", "extend"),
            ("gaz", "glueafterzwj"),
            ("pp", "prepend"),
            ("ri", "regionalindicator"),
            ("sm", "spacingmark"),
            ("xx", "other"),
        ],
    ),
    (
        "numerictype",
        &[
            ("de", "decimal"),
            ("di", "digit"),
            ("nu", "numeric"),
        ],
    ),
    (
        "numericvalue",
        &[
            ("0.003125", "1/320"),
            ("0.00625", "1/160"),
            ("0.0125", "1/80"),
            ("0.015625", "1/64"),
            ("0.025", "1/40"),
            ("0.03125", "1/32"),
            ("0.0375", "3/80"),
            ("0.046875", "3/64"),
            ("0.05", "1/20"),
            ("0.0625", "1/16"),
            ("0.1", "1/10"),
            ("0.125", "1/8"),
            ("0.15", "3/20"),
            ("0.1875", "3/16"),
            ("0.2", "1/5"),
            ("0.25", "1/4"),
            ("0.375", "3/8"),
            ("0.4", "2/5"),
            ("0.5", "1/2"),
            ("0.6", "3/5"),
            ("0.625", "5/8"),
            ("0.75", "3/4"),
            ("0.8", "4/5"),
            ("0.875", "7/8"),
            ("1.5", "3/2"),
            ("2.5", "5/2"),
            ("3.5", "7/2"),
            ("4.5", "9/2"),
            ("5.5", "11/2"),
            ("6.5", "13/2"),
            ("7.5", "15/2"),
            ("8.5", "17/2"),
        ],
    ),
    (
        "sentencebreak",
        &[
            ("at", "aterm"),
            ("cl", "close"),
            ("ex", "extend"),
            ("fo", "format"),
            ("le", "oletter"),
            ("lo", "lower"),
            ("nu", "numeric"),
            ("sc", "scontinue"),
            ("se", "sep"),
            ("st", "sterm"),
            ("up", "upper"),
            ("xx", "other"),
        ],
    ),
    (
        "wordbreak",
        &[
            ("dq", "doublequote"),
            ("eb", "ebase"),
            ("ebg", "ebasegaz"),
            ("em", "emodifier"),
            ("ex", "extendnumlet"),
            ("fo", "format"),
            ("gaz", "glueafterzwj"),
            ("hl", "hebrewletter"),
            ("ka", "katakana"),
            ("le", "aletter"),
            ("mb", "midnumlet"),
            ("ml", "midletter"),
            ("mn", "midnum"),
            ("nl", "newline"),
            ("nu", "numeric"),
            ("ri", "regionalindicator"),
            ("sq", "singlequote"),
            ("xx", "other"),
        ],
    ),
];
