//! Verbal nouns that the ending rules cannot derive. Forms are listed most
//! standard first.

pub(crate) static NOUNS: &[(&str, &[&str])] = &[
    // -rzeć -> -arcie
    ("drzeć", &["darcie"]),
    ("mrzeć", &["marcie"]),
    ("przeć", &["parcie"]),
    ("trzeć", &["tarcie"]),
    ("wrzeć", &["warcie", "wrzenie"]),
    ("żreć", &["żarcie"]),
    ("zetrzeć", &["starcie"]),
    ("zeprzeć", &["sparcie"]),
    ("sprzeć", &["sprzenie"]),
    ("wesprzeć", &["wsparcie"]),
    ("odewrzeć", &["odewarcie"]),
    ("rozpostrzeć", &["rozpostarcie"]),
    ("obumrzeć", &["obumarcie"]),
    ("odumrzeć", &["odumarcie"]),
    ("zaumrzeć", &["zaumarcie"]),
    ("zeźrzeć", &["zziarcie"]),
    ("zeźreć", &["zziarcie"]),
    ("zeżreć", &["zżarcie"]),
    ("zrzeć", &["żarcie"]),
    ("mleć", &["mielenie"]),
    ("pleć", &["pielenie"]),
    ("otworzyć", &["otwarcie"]),
    ("przetworzyć", &["przetwarcie"]),
    ("roztworzyć", &["roztwarcie"]),
    ("słonić", &["słonięcie"]),
    ("przychrzanić", &["przychrzanienie"]),
    ("susnąć", &["susnięcie"]),
    // Monosyllabic -ić/-yć
    ("bić", &["bicie"]),
    ("gnić", &["gnicie"]),
    ("pić", &["picie"]),
    ("wić", &["wicie"]),
    ("powić", &["powicie"]),
    ("być", &["bycie"]),
    ("żyć", &["życie"]),
    ("myć", &["mycie"]),
    ("ryć", &["rycie"]),
    ("szyć", &["szycie"]),
    ("kryć", &["krycie"]),
    ("wyć", &["wycie"]),
    ("tyć", &["tycie"]),
    ("zbyć", &["zbycie"]),
    ("dobyć", &["dobycie"]),
    ("użyć", &["użycie"]),
    ("pożyć", &["pożycie"]),
    ("spożyć", &["spożycie"]),
    ("współżyć", &["współżycie"]),
    ("współprzeżyć", &["współprzeżycie"]),
    ("poszyć", &["poszycie"]),
    ("sposzyć", &["sposzycie"]),
    // Softening exceptions
    ("gzić", &["gżenie"]),
    ("śnić", &["śnienie"]),
    ("czcić", &["czczenie"]),
    ("chrzcić", &["chrzczenie"]),
    ("zbezeczcić", &["zbezeczczenie"]),
    ("mierzić", &["mierżenie"]),
    ("gałęzić", &["gałęzienie"]),
    ("więzić", &["więzienie"]),
    ("francuzić", &["francuzienie"]),
    ("kniazić", &["kniazienie"]),
    ("lesić", &["lesienie"]),
    ("tłamsić", &["tłamszenie"]),
    ("osić", &["oszenie"]),
    ("zażyznić", &["zażyznienie"]),
    ("musieć", &["muszenie"]),
    ("wisieć", &["wiszenie"]),
    ("półwisieć", &["półwiszenie"]),
    ("chrzęścieć", &["chrzęszczenie"]),
    // -c
    ("biec", &["biegnięcie"]),
    ("ciec", &["cieczenie", "cieknięcie"]),
    ("ściec", &["ścieczenie", "ścieknięcie"]),
    ("lec", &["legnięcie", "lężenie"]),
    ("ląc", &["lęgnięcie", "lęknięcie", "lężenie"]),
    ("móc", &["możenie"]),
    ("pomóc", &["pomożenie"]),
    ("domóc", &["domożenie"]),
    ("wspomóc", &["wspomożenie"]),
    ("niemóc", &["niemożenie"]),
    ("niedomóc", &["niedomożenie"]),
    ("piec", &["pieczenie"]),
    ("rzec", &["rzeczenie"]),
    ("złorzec", &["złorzeczenie", "złorzeknięcie"]),
    ("siec", &["sieczenie"]),
    ("strzec", &["strzeżenie"]),
    ("postrzec", &["postrzeżenie"]),
    ("spostrzec", &["spostrzeżenie"]),
    ("strzyc", &["strzyżenie"]),
    ("tłuc", &["tłuczenie"]),
    ("wlec", &["wleczenie"]),
    ("oblec", &["obleczenie"]),
    ("prząc", &["przęgnięcie", "przężenie"]),
    ("siąc", &["sięgnięcie", "siężenie"]),
    ("przysiąc", &["przysięgnięcie", "przysiężenie"]),
    ("krzywoprzysiąc", &["krzywoprzysięgnięcie", "krzywoprzysiężenie"]),
    ("przesiąc", &["przesiąknięcie"]),
    ("żec", &["żegnięcie", "żżenie"]),
    ("wściec", &["wścieknięcie", "wścieczenie"]),
    ("zapobiec", &["zapobiegnięcie"]),
    ("współubiec", &["współubiegnięcie"]),
    // -ść, -źć
    ("bość", &["bodzenie"]),
    ("bóść", &["bodzenie"]),
    ("gnieść", &["gniecenie"]),
    ("grześć", &["grzebienie"]),
    ("iść", &["iście"]),
    ("jść", &["jście"]),
    ("nijść", &["nijście"]),
    ("niść", &["niście"]),
    ("pójść", &["pójście"]),
    ("najść", &["najście"]),
    ("jeść", &["jedzenie"]),
    ("nadojeść", &["nadojedzenie"]),
    ("kraść", &["kradzenie"]),
    ("kłaść", &["kładzenie"]),
    ("mieść", &["miecenie"]),
    ("nieść", &["niesienie"]),
    ("podnieść", &["podniesienie"]),
    ("paść", &["padnięcie", "pasienie"]),
    ("upaść", &["upadnięcie"]),
    ("zaprzepaść", &["zaprzepadnięcie"]),
    ("pleść", &["plecenie"]),
    ("prząść", &["przędzenie"]),
    ("róść", &["rośnięcie"]),
    ("siąść", &["siądnięcie"]),
    ("wsiąść", &["wsiądnięcie"]),
    ("współposiąść", &["współposiądnięcie"]),
    ("sieść", &["siędnięcie"]),
    ("trząść", &["trzęsienie"]),
    ("strząść", &["strzęsienie"]),
    ("wieść", &["wiedzenie"]),
    ("gryźć", &["gryzienie"]),
    ("grząźć", &["grzęzienie", "grzęźnięcie"]),
    ("leźć", &["lezienie"]),
    ("liźć", &["lezienie"]),
    ("naleźć", &["nalezienie"]),
    ("wieźć", &["wiezienie"]),
];

/// Bases whose verbal nouns carry over to prefixed verbs.
pub(crate) static NOUN_PREFIXABLE: &[&str] = &[
    "bić", "gnić", "pić", "wić", "powić", "być", "żyć", "myć", "ryć", "szyć", "kryć", "wyć",
    "tyć", "biec", "ciec", "lec", "móc", "piec", "rzec", "siec", "strzec", "strzyc", "tłuc",
    "wlec", "prząc", "siąc", "ląc", "bość", "bóść", "gnieść", "grześć", "iść", "jeść", "kraść",
    "kłaść", "mieść", "nieść", "paść", "pleść", "prząść", "róść", "siąść", "trząść", "jść",
    "nijść", "niść", "gryźć", "grząźć", "leźć", "liźć", "wieźć", "drzeć", "mrzeć", "przeć",
    "trzeć", "wrzeć", "żreć", "mleć", "pleć", "słonić", "musieć", "wisieć", "chrzęścieć",
    "gzić", "mierzić", "gałęzić", "więzić", "francuzić", "lesić", "tłamsić", "zbyć", "dobyć",
    "użyć", "pożyć", "poszyć", "wieść", "żec", "wściec", "oblec", "sieść", "pomóc", "domóc",
    "naleźć", "najść", "upaść", "podnieść", "przysiąc", "niemóc", "postrzec", "wsiąść",
    "strząść", "śnić", "czcić", "chrzcić",
];
