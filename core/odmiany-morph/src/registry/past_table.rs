//! Irregular past-tense stems.

use crate::builder::PastSpec as P;

pub(crate) static PAST: &[(&str, P<'static>)] = &[
    ("być", P::new("by")),
    // iść and its prefix-bound allomorphs
    ("iść", P::new("szed").other("sz")),
    ("jść", P::new("szed").other("sz")),
    ("nijść", P::new("szed").other("sz")),
    ("niść", P::new("szed").other("sz")),
    ("pójść", P::new("poszed").other("posz")),
    ("jeść", P::new("jad").virile("jed")),
    ("nadojeść", P::new("nadojad").virile("nadojed")),
    // Nasal -ąć: ą in the masculine singular, ę elsewhere
    ("wziąć", P::new("wzią").other("wzię")),
    ("przedsięwziąć", P::new("przedsięwzią").other("przedsięwzię")),
    ("jąć", P::new("ją").other("ję")),
    ("zdjąć", P::new("zdją").other("zdję")),
    ("rozdjąć", P::new("rozdją").other("rozdję")),
    ("miąć", P::new("mią").other("mię")),
    ("nająć", P::new("nają").other("naję")),
    ("dąć", P::new("dą").other("dę")),
    ("ciąć", P::new("cią").other("cię")),
    ("ściąć", P::new("ścią").other("ścię")),
    ("giąć", P::new("gią").other("gię")),
    ("piąć", P::new("pią").other("pię")),
    ("wspiąć", P::new("wspią").other("wspię")),
    ("żąć", P::new("żą").other("żę")),
    ("kląć", P::new("klą").other("klę")),
    // -ść, -źć
    ("siąść", P::new("siad").virile("sied")),
    ("sieść", P::new("siad").virile("sied")),
    ("podupaść", P::new("podupad")),
    ("naleźć", P::new("nalaz").virile("naleź")),
    ("kraść", P::new("krad")),
    ("kłaść", P::new("kład")),
    ("prząść", P::new("prząd").other("przęd")),
    ("gryźć", P::new("gryz").virile("gryź")),
    ("leźć", P::new("laz").virile("leź")),
    ("liźć", P::new("laz").virile("leź")),
    ("wieźć", P::new("wioz").sg3m("wióz").virile("wieź")),
    ("nieść", P::new("nios").sg3m("niós").virile("nieś")),
    ("pleść", P::new("plot").sg3m("plót").virile("plet")),
    ("grześć", P::new("grzeb")),
    ("rosnąć", P::new("ros").sg3m("rós").virile("roś")),
    ("rość", P::new("ros").sg3m("rós").virile("roś")),
    // -rzeć and -reć
    ("przeć", P::new("par")),
    ("wrzeć", P::new("wrza").virile("wrze")),
    ("zawrzeć", P::new("zawar")),
    ("wywrzeć", P::new("wywar")),
    ("dowrzeć", P::new("dowar")),
    ("zewrzeć", P::new("zwar")),
    ("odewrzeć", P::new("odewar")),
    ("trzeć", P::new("tar")),
    ("drzeć", P::new("dar")),
    ("mrzeć", P::new("mar")),
    ("żreć", P::new("żar")),
    ("zetrzeć", P::new("star")),
    ("zeprzeć", P::new("spar")),
    ("wesprzeć", P::new("wspar")),
    // Monosyllabic -ać
    ("brać", P::new("bra")),
    ("prać", P::new("pra")),
    ("dać", P::new("da")),
    ("stać", P::new("sta")),
    // a-stem -eć with the e-stem in the virile
    ("mieć", P::new("mia").virile("mie")),
    ("chcieć", P::new("chcia").virile("chcie")),
    ("wiedzieć", P::new("wiedzia").virile("wiedzie")),
    ("siedzieć", P::new("siedzia").virile("siedzie")),
    ("widzieć", P::new("widzia").virile("widzie")),
    ("słyszeć", P::new("słysza").virile("słysze")),
    ("musieć", P::new("musia").virile("musie")),
    // -c
    ("móc", P::new("mog").sg3m("móg")),
    ("biec", P::new("bieg")),
    ("lec", P::new("leg")),
    ("rzec", P::new("rzek")),
    ("ciec", P::new("ciek")),
    ("strzec", P::new("strzeg")),
    ("piec", P::new("piek")),
    ("przesiąc", P::new("przesiąk")),
    ("tłuc", P::new("tłuk")),
    ("wlec", P::new("wlok").sg3m("wlók").virile("wlek")),
    // -nąć with an inserted e in the masculine
    ("schnąć", P::new("sech").other("sch")),
    ("zeschnąć", P::new("ssech").other("zesch")),
    ("przysięgnąć", P::new("przysiąg").other("przysięg")),
];

/// Bases whose past paradigm carries over to prefixed verbs.
pub(crate) static PAST_PREFIXABLE: &[&str] = &[
    "być", "iść", "jść", "nijść", "niść", "jeść", "brać", "prać", "jąć", "dąć", "ciąć", "giąć",
    "piąć", "miąć", "nająć", "żąć", "kląć", "wziąć", "siąść", "sieść", "kraść", "kłaść",
    "prząść", "gryźć", "leźć", "naleźć", "wieźć", "nieść", "pleść", "grześć", "tłuc", "przeć",
    "wrzeć", "trzeć", "drzeć", "mrzeć", "żreć", "dać", "stać", "mieć", "wiedzieć", "siedzieć",
    "widzieć", "biec", "lec", "rzec", "ciec", "strzec", "piec", "wlec", "rosnąć", "rość",
    "schnąć", "przysięgnąć",
];
