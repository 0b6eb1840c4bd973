//! Irregular and curated present-tense paradigms.

use odmiany_protocol::PresentSlot::{Pl1, Pl2, Pl3, Sg1, Sg2, Sg3};

use crate::builder::ConjugationClass::{I, IIa, IIb, III, IV};
use crate::builder::PresentSpec as P;

pub(crate) static PRESENT: &[(&str, P<'static>)] = &[
    // Suppletive and athematic
    (
        "być",
        P::new(IV, "")
            .with(Sg1, "jestem")
            .with(Sg2, "jesteś")
            .with(Sg3, "jest")
            .with(Pl1, "jesteśmy")
            .with(Pl2, "jesteście")
            .with(Pl3, "są"),
    ),
    ("mieć", P::new(III, "m")),
    ("umieć", P::new(IV, "umie")),
    ("musieć", P::new(IIa, "mus").alternating("musz")),
    ("jeść", P::new(IV, "je").with(Pl3, "jedzą")),
    ("dać", P::new(III, "d").with(Pl3, "dadzą")),
    ("sprzedać", P::new(III, "sprzed").with(Pl3, "sprzedadzą")),
    ("wziąć", P::new(I, "weźmi").alternating("wezm")),
    ("ciąć", P::new(I, "tni").alternating("tn")),
    ("iść", P::new(I, "idzi").alternating("id")),
    ("jść", P::new(I, "jdzi").alternating("jd")),
    ("pójść", P::new(I, "pójdzi").alternating("pójd")),
    ("jechać", P::new(I, "jedzi").alternating("jad")),
    ("stać", P::new(I, "stani").alternating("stan")),
    ("paść", P::new(I, "padni").alternating("padn")),
    // brać type
    ("brać", P::new(I, "bierz").alternating("bior")),
    ("prać", P::new(I, "pierz").alternating("pior")),
    // Alternating -sać, -kać, -zać, -rać
    ("pisać", P::new(I, "pisz")),
    ("czesać", P::new(I, "czesz")),
    ("kołysać", P::new(I, "kołysz")),
    ("skakać", P::new(I, "skacz")),
    ("płakać", P::new(I, "płacz")),
    ("wiązać", P::new(I, "wiąż")),
    ("kazać", P::new(I, "każ")),
    ("okazać", P::new(I, "okaż")),
    ("wskazać", P::new(I, "wskaż")),
    ("mazać", P::new(I, "maż")),
    ("lizać", P::new(I, "liż")),
    ("karać", P::new(I, "karz")),
    // -sać that stay regular
    ("kasać", P::new(III, "kas")),
    ("ciosać", P::new(III, "cios")),
    ("ciesać", P::new(III, "cies")),
    ("krzesać", P::new(III, "krzes")),
    ("naleźć", P::new(I, "najdzi").alternating("najd")),
    ("spać", P::new(IIa, "śp").alternating("śpi")),
    ("bać", P::new(IIa, "bo").alternating("boj")),
    ("dziać", P::new(I, "dziej")),
    ("podobać", P::new(III, "podob")),
    // Monosyllabic -ić/-yć
    ("bić", P::new(I, "bij")),
    ("lić", P::new(I, "lij")),
    ("pić", P::new(I, "pij")),
    ("wić", P::new(I, "wij")),
    ("gnić", P::new(I, "gnij")),
    ("żyć", P::new(I, "żyj")),
    ("myć", P::new(I, "myj")),
    ("ryć", P::new(I, "ryj")),
    ("szyć", P::new(I, "szyj")),
    ("wyć", P::new(I, "wyj")),
    ("kryć", P::new(I, "kryj")),
    ("użyć", P::new(I, "użyj")),
    ("spożyć", P::new(I, "spożyj")),
    ("współżyć", P::new(I, "współżyj")),
    ("współprzeżyć", P::new(I, "współprzeżyj")),
    ("sposzyć", P::new(I, "sposzyj")),
    ("opowić", P::new(I, "opowij")),
    ("rozpowić", P::new(I, "rozpowij")),
    ("spowić", P::new(I, "spowij")),
    ("upowić", P::new(I, "upowij")),
    // Consonant-stem -ć and -c verbs
    ("pomnieć", P::new(IIa, "pomn")),
    ("wspomnieć", P::new(IIa, "wspomn")),
    ("mrzeć", P::new(I, "mrz").alternating("mr")),
    ("trzeć", P::new(I, "trz").alternating("tr")),
    ("drzeć", P::new(I, "drz").alternating("dr")),
    ("przeć", P::new(I, "prz").alternating("pr")),
    ("wrzeć", P::new(I, "wrz").alternating("wr")),
    ("wesprzeć", P::new(I, "wesprz").alternating("wespr")),
    ("żreć", P::new(I, "żr")),
    ("ciec", P::new(I, "ciekni").alternating("ciekn")),
    ("ulec", P::new(I, "ulegni").alternating("ulegn")),
    ("wściec", P::new(I, "wściekni").alternating("wściekn")),
    ("rzec", P::new(I, "rzecz").alternating("rzekn")),
    ("strzec", P::new(I, "strzeż").alternating("strzeg")),
    ("tłuc", P::new(I, "tłucz").alternating("tłuk")),
    ("kraść", P::new(I, "kradni").alternating("kradn")),
    ("kłaść", P::new(I, "kładzi").alternating("kład")),
    ("grześć", P::new(I, "grzebi").alternating("grzeb")),
    ("pleść", P::new(I, "pleci").alternating("plot")),
    ("woleć", P::new(IIa, "wol")),
    // -jąć, -cząć, -piąć, kląć
    ("jąć", P::new(I, "jmi").alternating("jm")),
    ("zdjąć", P::new(I, "zdejmi").alternating("zdejm")),
    ("podjąć", P::new(I, "podejmi").alternating("podejm")),
    ("odjąć", P::new(I, "odejmi").alternating("odejm")),
    ("objąć", P::new(I, "obejmi").alternating("obejm")),
    ("nająć", P::new(I, "najmi").alternating("najm")),
    ("cząć", P::new(I, "czni").alternating("czn")),
    ("począć", P::new(I, "poczni").alternating("poczn")),
    ("odpocząć", P::new(I, "odpoczni").alternating("odpoczn")),
    ("rozpocząć", P::new(I, "rozpoczni").alternating("rozpoczn")),
    ("spocząć", P::new(I, "spoczni").alternating("spoczn")),
    ("wypocząć", P::new(I, "wypoczni").alternating("wypoczn")),
    ("wszcząć", P::new(I, "wszczni").alternating("wszczn")),
    ("poczęć", P::new(I, "poczni").alternating("poczn")),
    ("kląć", P::new(I, "klni").alternating("kln")),
    ("piąć", P::new(I, "pni").alternating("pn")),
    ("wspiąć", P::new(I, "wespni").alternating("wespn")),
    ("zapiąć", P::new(I, "zapni").alternating("zapn")),
    ("przypiąć", P::new(I, "przypni").alternating("przypn")),
    ("odpiąć", P::new(I, "odpni").alternating("odpn")),
    ("dopiąć", P::new(I, "dopni").alternating("dopn")),
    ("spiąć", P::new(I, "spni").alternating("spn")),
    ("wpiąć", P::new(I, "wpni").alternating("wpn")),
    ("napiąć", P::new(I, "napni").alternating("napn")),
    ("rozpiąć", P::new(I, "rozpni").alternating("rozpn")),
    ("wypiąć", P::new(I, "wypni").alternating("wypn")),
    // Action -eć verbs
    ("grzmieć", P::new(IIa, "grzm").alternating("grzmi")),
    ("szumieć", P::new(IIa, "szum").alternating("szumi")),
    ("tłumieć", P::new(IIa, "tłum").alternating("tłumi")),
    ("patrzeć", P::new(IIb, "patrz")),
    ("cierpieć", P::new(IIa, "cierp").alternating("cierpi")),
    ("wisieć", P::new(IIa, "wis").alternating("wisz")),
    ("tkwieć", P::new(IIa, "tkw").alternating("tkwi")),
    ("śmierdzieć", P::new(IIa, "śmierdz")),
    ("swędzieć", P::new(IIa, "swędz")),
    ("pierdzieć", P::new(IIa, "pierdz")),
    ("skomleć", P::new(IIa, "skoml")),
    ("widzieć", P::new(IIa, "widz")),
    ("siedzieć", P::new(IIa, "siedz")),
    ("lecieć", P::new(IIa, "lec")),
    ("pachnieć", P::new(I, "pachni").alternating("pachn")),
    // boleć family, split by sense
    ("poboleć", P::new(IIa, "pobol")),
    ("rozboleć", P::new(IIa, "rozbol")),
    ("zaboleć", P::new(IIa, "zabol")),
    ("oboleć", P::new(I, "obolej")),
    ("odboleć", P::new(I, "odbolej")),
    ("przeboleć", P::new(I, "przebolej")),
    ("współboleć", P::new(I, "współbolej")),
    ("wyboleć", P::new(I, "wybolej")),
    // Inchoative -eć
    ("starzeć", P::new(I, "starzej")),
    ("gorzeć", P::new(I, "gorzej")),
    ("dorzeć", P::new(I, "dorzej")),
    ("dobrzeć", P::new(I, "dobrzej")),
    ("dojrzeć", P::new(I, "dojrzej")),
    ("doźrzeć", P::new(I, "doźrzej")),
    ("przejrzeć", P::new(I, "przejrzej")),
    ("chorzeć", P::new(I, "chorzej")),
    ("tężeć", P::new(I, "tężej")),
    ("dumieć", P::new(I, "dumiej")),
    ("goreć", P::new(I, "gorej")),
    ("śniedzieć", P::new(I, "śniedziej")),
    ("srebrzeć", P::new(I, "srebrzej")),
    ("cukrzeć", P::new(I, "cukrzej")),
    ("dorośleć", P::new(I, "doroślej")),
    ("wydorośleć", P::new(I, "wydoroślej")),
    ("zelżeć", P::new(I, "zelżej")),
    ("wilżeć", P::new(I, "wilżej")),
    ("wężeć", P::new(I, "wężej")),
    ("rzedzieć", P::new(I, "rzedziej")),
    ("sfolżeć", P::new(I, "sfolżej")),
    ("szlachcieć", P::new(I, "szlachciej")),
    ("ochujeć", P::new(I, "ochujej")),
    ("ociężeć", P::new(I, "ociężej")),
    ("ściężeć", P::new(I, "ściężej")),
    ("oszedzieć", P::new(I, "oszedziej")),
    ("szedzieć", P::new(I, "szedziej")),
    ("sposążeć", P::new(I, "sposążej")),
    ("wyryżeć", P::new(I, "wyryżej")),
    ("źreć", P::new(I, "źrej")),
    ("źrzeć", P::new(I, "źrzej")),
    ("pomieć", P::new(III, "pom")),
    // -wać and -ać with j
    ("rwać", P::new(I, "rwi").alternating("rw")),
    ("zwać", P::new(I, "zwi").alternating("zw")),
    ("dbać", P::new(III, "db")),
    ("śmiać", P::new(I, "śmiej")),
    ("lać", P::new(I, "lej")),
    ("wiać", P::new(I, "wiej")),
    ("chwiać", P::new(I, "chwiej")),
    ("siać", P::new(I, "siej")),
    ("oziać", P::new(I, "oziej")),
    ("piać", P::new(I, "piej")),
    ("spiać", P::new(I, "spiej")),
    ("dośpiać", P::new(I, "dośpiej")),
    ("uśpiać", P::new(I, "uśpiej")),
    ("krajać", P::new(I, "kraj")),
    ("tajać", P::new(I, "taj")),
    ("łajać", P::new(I, "łaj")),
    ("knajać", P::new(I, "knaj")),
    ("utajać", P::new(III, "utaj")),
    ("zatajać", P::new(III, "zataj")),
    ("dziamdziać", P::new(III, "dziamdzi")),
    ("chować", P::new(III, "chow")),
    // -ić without j or with a cluster
    ("jeździć", P::new(IIa, "jeźdź").alternating("jeżdż")),
    ("czcić", P::new(IIa, "czc").alternating("czcz")),
    ("uczcić", P::new(IIa, "uczc").alternating("uczcz")),
    ("kpić", P::new(IIa, "kp").alternating("kpi")),
    ("śnić", P::new(IIa, "śn").alternating("śni")),
    ("tlić", P::new(IIa, "tl")),
    ("clić", P::new(IIa, "cl")),
    ("dlić", P::new(IIa, "dl")),
    // Regular -bać/-pać against the labial rule
    ("ćpać", P::new(III, "ćp")),
    ("bimbać", P::new(III, "bimb")),
    ("gabać", P::new(III, "gab")),
    ("chybać", P::new(III, "chyb")),
    ("gibać", P::new(III, "gib")),
    ("gdybać", P::new(III, "gdyb")),
    ("zaniedbać", P::new(III, "zaniedb")),
    ("siorbać", P::new(III, "siorb")),
    ("stąpać", P::new(III, "stąp")),
    ("pchlać", P::new(III, "pchl")),
    ("rychlać", P::new(III, "rychl")),
    ("kpać", P::new(III, "kp")),
    ("kasłać", P::new(III, "kasł")),
    ("cierpać", P::new(III, "cierp")),
    ("siąpać", P::new(III, "siąp")),
    ("tyrpać", P::new(III, "tyrp")),
    ("ściubać", P::new(III, "ściub")),
    ("ślipać", P::new(III, "ślip")),
    ("bombać", P::new(III, "bomb")),
    // -iwać/-ywać exceptions
    ("strzeliwać", P::new(I, "strzeliwuj")),
    ("myśliwać", P::new(I, "myśliwuj")),
    ("boliwać", P::new(I, "boliwuj")),
    ("mgliwać", P::new(I, "mgliwuj")),
    ("skuliwać", P::new(I, "skuliwuj")),
    ("porozstrzeliwać", P::new(I, "porozstrzeliwuj")),
    ("powystrzeliwać", P::new(I, "powystrzeliwuj")),
    ("mieszywać", P::new(I, "mieszuj")),
    ("supływać", P::new(I, "supłuj")),
    ("bazgrywać", P::new(I, "bazgruj")),
    ("podobywać", P::new(I, "podobuj")),
];

/// Bases whose present paradigm carries over to prefixed verbs.
pub(crate) static PRESENT_PREFIXABLE: &[&str] = &[
    "pisać", "brać", "jechać", "dać", "wziąć", "iść", "jść", "jeść", "prać", "czesać", "kasać",
    "ciosać", "ciesać", "skakać", "płakać", "wiązać", "kazać", "mazać", "lizać", "kołysać",
    "krzesać", "naleźć", "spać", "bać", "dziać", "podobać", "bić", "lić", "pić", "żyć", "myć",
    "ryć", "szyć", "wyć", "kryć", "pomnieć", "mrzeć", "ciec", "woleć", "jąć", "cząć", "rwać",
    "zwać", "dbać", "śmiać", "cierpieć", "wisieć", "jeździć", "pachnieć", "strzec", "chować",
    "grzmieć", "szumieć", "tłumieć", "okazać", "karać", "kraść", "kłaść", "lać", "grześć",
    "przeć", "wrzeć", "śnić", "rzec", "wiać", "krajać", "nająć", "tłuc", "pleść", "kląć",
    "żreć", "chwiać", "starzeć", "gorzeć", "dorzeć", "dobrzeć", "czcić", "kpić", "ulec",
    "wściec", "dojrzeć", "swędzieć", "tajać", "ćpać", "wić", "bimbać", "gabać", "chybać",
    "gnić", "siać", "gibać", "siorbać", "stąpać", "pchlać", "rychlać", "gdybać", "użyć",
    "chorzeć", "tężeć", "dumieć", "goreć", "śniedzieć", "srebrzeć", "cukrzeć", "łajać",
    "pierdzieć", "skomleć", "strzeliwać", "myśliwać", "boliwać", "mgliwać", "kpać", "tlić",
    "clić", "dlić", "kasłać", "mieszywać", "supływać", "bazgrywać", "podobywać", "cierpać",
    "siąpać", "tyrpać", "ściubać", "ślipać", "bombać", "szedzieć", "piać", "spiać",
    "skuliwać", "śmierdzieć", "patrzeć", "stać", "paść", "trzeć", "drzeć", "widzieć",
    "siedzieć", "lecieć",
];
