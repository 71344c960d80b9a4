use crate::lang::{Lang, LangEntry};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_tables {
    ($(
        $code:ident, $code_str:literal, $name:literal,
        map: [ $($from:literal => $to:literal),* $(,)? ],
        remove: [ $($word:literal),* $(,)? ]
    ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        // Per-table static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    pub static MAP: &[(&str, &str)] = &[
                        $(($from, $to)),*
                    ];

                    pub static REMOVE_WORDS: &[&str] = &[$($word),*];
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static LANG_TABLE: Map<&'static str, LangEntry> = phf_map! {
                $(
                    $code_str => LangEntry {
                        lang: $code,
                        map: [<$code:lower _data>]::MAP,
                        remove_words: [<$code:lower _data>]::REMOVE_WORDS,
                    }
                ),*
            };
        }

        /// Built-in registry order. Later tables override earlier ones.
        pub static REGISTRY_ORDER: &[Lang] = &[$($code),*];

        // Helper: `Lang::from_code`
        pub fn from_code(code: &str) -> Option<Lang> {
            let lower = code.to_lowercase();
            match lower.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Table definitions (single source of truth)
//
//    Order matters: the generic `latin`, `currency` and `latin_symbols`
//    categories come last so they win over every language table that is not
//    the requested one. Language tables start with their words for the
//    expandable symbols (= % ∑ ∆ ∞ ♥ & +).
// ---------------------------------------------------------------------------
define_tables! {
    ELL, "el", "Greek",
        map: [
            "=" => " ίσος ", "%" => " τοις εκατό ", "∑" => " άθροισμα ", "∆" => " δέλτα ",
            "∞" => " άπειρο ", "♥" => " αγάπη ", "&" => " και ", "+" => " συν ", "α" => "a",
            "β" => "b", "γ" => "g", "δ" => "d", "ε" => "e", "ζ" => "z", "η" => "h", "θ" => "8",
            "ι" => "i", "κ" => "k", "λ" => "l", "μ" => "m", "ν" => "n", "ξ" => "3", "ο" => "o",
            "π" => "p", "ρ" => "r", "σ" => "s", "τ" => "t", "υ" => "y", "φ" => "f", "χ" => "x",
            "ψ" => "ps", "ω" => "w", "ά" => "a", "έ" => "e", "ί" => "i", "ό" => "o", "ύ" => "y",
            "ή" => "h", "ώ" => "w", "ς" => "s", "ϊ" => "i", "ΰ" => "y", "ϋ" => "y", "ΐ" => "i",
            "Α" => "A", "Β" => "B", "Γ" => "G", "Δ" => "D", "Ε" => "E", "Ζ" => "Z", "Η" => "H",
            "Θ" => "8", "Ι" => "I", "Κ" => "K", "Λ" => "L", "Μ" => "M", "Ν" => "N", "Ξ" => "3",
            "Ο" => "O", "Π" => "P", "Ρ" => "R", "Σ" => "S", "Τ" => "T", "Υ" => "Y", "Φ" => "F",
            "Χ" => "X", "Ψ" => "PS", "Ω" => "W", "Ά" => "A", "Έ" => "E", "Ί" => "I", "Ό" => "O",
            "Ύ" => "Y", "Ή" => "H", "Ώ" => "W", "Ϊ" => "I", "Ϋ" => "Y", "ΑΥ" => "AU",
            "Αυ" => "Au", "ΟΥ" => "OU", "Ου" => "Ou", "ΕΥ" => "EU", "Ευ" => "Eu", "ΕΙ" => "I",
            "Ει" => "I", "ΟΙ" => "I", "Οι" => "I", "ΥΙ" => "I", "Υι" => "I", "ΑΎ" => "AU",
            "Αύ" => "Au", "ΟΎ" => "OU", "Ού" => "Ou", "ΕΎ" => "EU", "Εύ" => "Eu", "ΕΊ" => "I",
            "Εί" => "I", "ΟΊ" => "I", "Οί" => "I", "ΎΙ" => "I", "Ύι" => "I", "ΥΊ" => "I",
            "Υί" => "I", "αυ" => "au", "ου" => "ou", "ευ" => "eu", "ει" => "i", "οι" => "i",
            "υι" => "i", "αύ" => "au", "ού" => "ou", "εύ" => "eu", "εί" => "i", "οί" => "i",
            "ύι" => "i", "υί" => "i", "ϐ" => "v", "ϑ" => "th",
        ],
        remove: [],

    HIN, "hi", "Hindi",
        map: [
            "=" => " समान ", "%" => " प्रतिशत ", "∑" => " योग ", "∆" => " डेल्टा ",
            "∞" => " अनंत ", "♥" => " प्यार ", "&" => " और ", "+" => " प्लस ", "अ" => "a",
            "आ" => "aa", "ए" => "e", "ई" => "ii", "ऍ" => "ei", "ऎ" => "ae", "ऐ" => "ai",
            "इ" => "i", "ओ" => "o", "ऑ" => "oi", "ऒ" => "oii", "ऊ" => "uu", "औ" => "ou",
            "उ" => "u", "ब" => "B", "भ" => "Bha", "च" => "Ca", "छ" => "Chha", "ड" => "Da",
            "ढ" => "Dha", "फ" => "Fa", "फ़" => "Fi", "ग" => "Ga", "घ" => "Gha", "ग़" => "Ghi",
            "ह" => "Ha", "ज" => "Ja", "झ" => "Jha", "क" => "Ka", "ख" => "Kha", "ख़" => "Khi",
            "ल" => "L", "ळ" => "Li", "ऌ" => "Li", "ऴ" => "Lii", "ॡ" => "Lii", "म" => "Ma",
            "न" => "Na", "ङ" => "Na", "ञ" => "Nia", "ण" => "Nae", "ऩ" => "Ni", "ॐ" => "oms",
            "प" => "Pa", "क़" => "Qi", "र" => "Ra", "ऋ" => "Ri", "ॠ" => "Ri", "ऱ" => "Ri",
            "स" => "Sa", "श" => "Sha", "ष" => "Shha", "ट" => "Ta", "त" => "Ta", "ठ" => "Tha",
            "द" => "Tha", "थ" => "Tha", "ध" => "Thha", "ड़" => "ugDha", "ढ़" => "ugDhha",
            "व" => "Va", "य" => "Ya", "य़" => "Yi", "ज़" => "Za",
        ],
        remove: [],

    SWE, "sv", "Swedish",
        map: [
            "Ä" => "A", "Å" => "a", "Ö" => "O", "ä" => "a", "å" => "a", "ö" => "o",
        ],
        remove: [],

    TUR, "tr", "Turkish",
        map: [
            "=" => " eşit ", "%" => " yüzde ", "∑" => " Toplam ", "∆" => " delta ",
            "∞" => " sonsuzluk ", "♥" => " Aşk ", "&" => " ve ", "+" => " artı ", "ş" => "s",
            "Ş" => "S", "ı" => "i", "İ" => "I", "ç" => "c", "Ç" => "C", "ü" => "u", "Ü" => "U",
            "ö" => "o", "Ö" => "O", "ğ" => "g", "Ğ" => "G",
        ],
        remove: [],

    BUL, "bg", "Bulgarian",
        map: [
            "=" => " равен ", "%" => " на сто ", "∑" => " сума ", "∆" => " делта ",
            "∞" => " безкрайност ", "♥" => " обичам ", "&" => " и ", "+" => " плюс ",
            "Щ" => "Sht", "Ш" => "Sh", "Ч" => "Ch", "Ц" => "C", "Ю" => "Yu", "Я" => "Ya",
            "Ж" => "J", "А" => "A", "Б" => "B", "В" => "V", "Г" => "G", "Д" => "D", "Е" => "E",
            "З" => "Z", "И" => "I", "Й" => "Y", "К" => "K", "Л" => "L", "М" => "M", "Н" => "N",
            "О" => "O", "П" => "P", "Р" => "R", "С" => "S", "Т" => "T", "У" => "U", "Ф" => "F",
            "Х" => "H", "Ь" => "", "Ъ" => "A", "щ" => "sht", "ш" => "sh", "ч" => "ch",
            "ц" => "c", "ю" => "yu", "я" => "ya", "ж" => "j", "а" => "a", "б" => "b", "в" => "v",
            "г" => "g", "д" => "d", "е" => "e", "з" => "z", "и" => "i", "й" => "y", "к" => "k",
            "л" => "l", "м" => "m", "н" => "n", "о" => "o", "п" => "p", "р" => "r", "с" => "s",
            "т" => "t", "у" => "u", "ф" => "f", "х" => "h", "ь" => "", "ъ" => "a", "ия" => "ia",
            "йо" => "iо", "ьо" => "io",
        ],
        remove: [],

    MYA, "by", "Burmese",
        map: [
            "=" => " တန်းတူညီမျှ ", "%" => " ရာခိုင်နှုန်းက ", "∑" => " လဒ် ",
            "∆" => " မြစ်ဝကျွန်းပေါ် ", "∞" => " အဆုံးမဲ့ ", "♥" => " မေတ္တာ ", "&" => " နဲ့ ",
            "+" => " အပေါင်း ", "က" => "k", "ခ" => "kh", "ဂ" => "g", "ဃ" => "ga", "င" => "ng",
            "စ" => "s", "ဆ" => "sa", "ဇ" => "z", "စျ" => "za", "ည" => "ny", "ဋ" => "t",
            "ဌ" => "ta", "ဍ" => "d", "ဎ" => "da", "ဏ" => "na", "တ" => "t", "ထ" => "ta",
            "ဒ" => "d", "ဓ" => "da", "န" => "n", "ပ" => "p", "ဖ" => "pa", "ဗ" => "b",
            "ဘ" => "ba", "မ" => "m", "ယ" => "y", "ရ" => "ya", "လ" => "l", "ဝ" => "w",
            "သ" => "th", "ဟ" => "h", "ဠ" => "la", "အ" => "a", "ြ" => "y", "ျ" => "ya",
            "ွ" => "w", "ြွ" => "yw", "ျွ" => "ywa", "ှ" => "h", "ဧ" => "e", "၏" => "-e",
            "ဣ" => "i", "ဤ" => "-i", "ဉ" => "u", "ဦ" => "-u", "ဩ" => "aw", "သြော" => "aw",
            "ဪ" => "aw", "၍" => "ywae", "၌" => "hnaik", "၀" => "0", "၁" => "1", "၂" => "2",
            "၃" => "3", "၄" => "4", "၅" => "5", "၆" => "6", "၇" => "7", "၈" => "8", "၉" => "9",
            "္" => "", "့" => "", "း" => "", "ာ" => "a", "ါ" => "a", "ေ" => "e", "ဲ" => "e",
            "ိ" => "i", "ီ" => "i", "ို" => "o", "ု" => "u", "ူ" => "u", "ေါင်" => "aung",
            "ော" => "aw", "ော်" => "aw", "ေါ" => "aw", "ေါ်" => "aw", "်" => "at", "က်" => "et",
            "ိုက်" => "aik", "ောက်" => "auk", "င်" => "in", "ိုင်" => "aing", "ောင်" => "aung",
            "စ်" => "it", "ည်" => "i", "တ်" => "at", "ိတ်" => "eik", "ုတ်" => "ok",
            "ွတ်" => "ut", "ေတ်" => "it", "ဒ်" => "d", "ိုဒ်" => "ok", "ုဒ်" => "ait",
            "န်" => "an", "ာန်" => "an", "ိန်" => "ein", "ုန်" => "on", "ွန်" => "un",
            "ပ်" => "at", "ိပ်" => "eik", "ုပ်" => "ok", "ွပ်" => "ut", "န်ုပ်" => "nub",
            "မ်" => "an", "ိမ်" => "ein", "ုမ်" => "on", "ွမ်" => "un", "ယ်" => "e",
            "ိုလ်" => "ol", "ဉ်" => "in", "ံ" => "an", "ိံ" => "ein", "ုံ" => "on",
        ],
        remove: [],

    HRV, "hr", "Croatian",
        map: [
            "=" => " Jednaki ", "%" => " Posto ", "∑" => " zbroj ", "∆" => " Delta ",
            "∞" => " beskonačno ", "♥" => " ljubav ", "&" => " I ", "+" => " Plus ", "Č" => "C",
            "Ć" => "C", "Ž" => "Z", "Š" => "S", "Đ" => "Dj", "č" => "c", "ć" => "c", "ž" => "z",
            "š" => "s", "đ" => "dj",
        ],
        remove: [],

    FIN, "fi", "Finnish",
        map: [
            "=" => " Sama ", "%" => " Prosenttia ", "∑" => " sum ", "∆" => " delta ",
            "∞" => " ääretön ", "♥" => " rakkautta ", "&" => " Ja ", "+" => " Plus ", "Ä" => "A",
            "Ö" => "O", "ä" => "a", "ö" => "o",
        ],
        remove: [],

    KAT, "ka", "Georgian",
        map: [
            "=" => " თანასწორი ", "%" => " პროცენტი ", "∑" => " თანხა ", "∆" => " დელტა ",
            "∞" => " უსასრულო ", "♥" => " სიყვარული ", "&" => " და ", "+" => " პლუს ",
            "ა" => "a", "ბ" => "b", "გ" => "g", "დ" => "d", "ე" => "e", "ვ" => "v", "ზ" => "z",
            "თ" => "t", "ი" => "i", "კ" => "k", "ლ" => "l", "მ" => "m", "ნ" => "n", "ო" => "o",
            "პ" => "p", "ჟ" => "zh", "რ" => "r", "ს" => "s", "ტ" => "t", "უ" => "u", "ფ" => "f",
            "ქ" => "k", "ღ" => "gh", "ყ" => "q", "შ" => "sh", "ჩ" => "ch", "ც" => "ts",
            "ძ" => "dz", "წ" => "ts", "ჭ" => "ch", "ხ" => "kh", "ჯ" => "j", "ჰ" => "h",
        ],
        remove: [],

    RUS, "ru", "Russian",
        map: [
            "=" => " равный ", "%" => " процент ", "∑" => " сумма ", "∆" => " дельта ",
            "∞" => " бесконечность ", "♥" => " люблю ", "&" => " а также ", "+" => " плюс ",
            "а" => "a", "б" => "b", "в" => "v", "г" => "g", "д" => "d", "е" => "e", "ё" => "yo",
            "ж" => "zh", "з" => "z", "и" => "i", "й" => "j", "к" => "k", "л" => "l", "м" => "m",
            "н" => "n", "о" => "o", "п" => "p", "р" => "r", "с" => "s", "т" => "t", "у" => "u",
            "ф" => "f", "х" => "h", "ц" => "c", "ч" => "ch", "ш" => "sh", "щ" => "sh", "ъ" => "",
            "ы" => "y", "ь" => "", "э" => "e", "ю" => "yu", "я" => "ya", "А" => "A", "Б" => "B",
            "В" => "V", "Г" => "G", "Д" => "D", "Е" => "E", "Ё" => "Yo", "Ж" => "Zh", "З" => "Z",
            "И" => "I", "Й" => "J", "К" => "K", "Л" => "L", "М" => "M", "Н" => "N", "О" => "O",
            "П" => "P", "Р" => "R", "С" => "S", "Т" => "T", "У" => "U", "Ф" => "F", "Х" => "H",
            "Ц" => "C", "Ч" => "Ch", "Ш" => "Sh", "Щ" => "Sh", "Ъ" => "", "Ы" => "Y", "Ь" => "",
            "Э" => "E", "Ю" => "Yu", "Я" => "Ya", "№" => "",
        ],
        remove: [],

    UKR, "uk", "Ukrainian",
        map: [
            "=" => " рівний ", "%" => " відсотків ", "∑" => " сума ", "∆" => " дельта ",
            "∞" => " нескінченність ", "♥" => " любов ", "&" => " і ", "+" => " плюс ",
            "Є" => "Ye", "І" => "I", "Ї" => "Yi", "Ґ" => "G", "є" => "ye", "і" => "i",
            "ї" => "yi", "ґ" => "g",
        ],
        remove: [],

    CES, "cs", "Czech",
        map: [
            "=" => " rovnat se ", "%" => " procento ", "∑" => " součet ", "∆" => " delta ",
            "∞" => " nekonečno ", "♥" => " láska ", "&" => " a ", "+" => " plus ", "č" => "c",
            "ď" => "d", "ě" => "e", "ň" => "n", "ř" => "r", "š" => "s", "ť" => "t", "ů" => "u",
            "ž" => "z", "Č" => "C", "Ď" => "D", "Ě" => "E", "Ň" => "N", "Ř" => "R", "Š" => "S",
            "Ť" => "T", "Ů" => "U", "Ž" => "Z",
        ],
        remove: [],

    DAN, "da", "Danish",
        map: [
            "=" => " Lige ", "%" => " Prozent ", "∑" => " sum ", "∆" => " delta ",
            "∞" => " uendelig ", "♥" => " kærlighed ", "&" => " Og ", "+" => " Plus ",
            "Æ" => "Ae", "æ" => "ae", "Ø" => "Oe", "ø" => "oe", "Å" => "Aa", "å" => "aa",
            "É" => "E", "é" => "e",
        ],
        remove: [],

    POL, "pl", "Polish",
        map: [
            "=" => " równy ", "%" => " procent ", "∑" => " suma ", "∆" => " delta ",
            "∞" => " nieskończoność ", "♥" => " miłość ", "&" => " i ", "+" => " plus ",
            "ą" => "a", "ć" => "c", "ę" => "e", "ł" => "l", "ń" => "n", "ó" => "o", "ś" => "s",
            "ź" => "z", "ż" => "z", "Ą" => "A", "Ć" => "C", "Ę" => "e", "Ł" => "L", "Ń" => "N",
            "Ó" => "O", "Ś" => "S", "Ź" => "Z", "Ż" => "Z",
        ],
        remove: [],

    RON, "ro", "Romanian",
        map: [
            "=" => " egal ", "%" => " la sută ", "∑" => " sumă ", "∆" => " deltă ",
            "∞" => " infinit ", "♥" => " dragoste ", "&" => " și ", "+" => " la care se adauga ",
            "ă" => "a", "â" => "a", "Ă" => "A", "Â" => "A", "î" => "i", "Î" => "I", "ș" => "s",
            "ş" => "s", "Ş" => "S", "Ș" => "S", "ț" => "t", "ţ" => "t", "Ţ" => "T", "Ț" => "T",
        ],
        remove: [],

    EPO, "eo", "Esperanto",
        map: [
            "=" => " Egalaj ", "%" => " Procento ", "∑" => " sumo ", "∆" => " delto ",
            "∞" => " senfina ", "♥" => " amo ", "&" => " Kaj ", "+" => " Pli ", "ĉ" => "cx",
            "ĝ" => "gx", "ĥ" => "hx", "ĵ" => "jx", "ŝ" => "sx", "ŭ" => "ux", "Ĉ" => "CX",
            "Ĝ" => "GX", "Ĥ" => "HX", "Ĵ" => "JX", "Ŝ" => "SX", "Ŭ" => "UX",
        ],
        remove: [],

    EST, "et", "Estonian",
        map: [
            "=" => " Võrdsed ", "%" => " Protsenti ", "∑" => " summa ", "∆" => " õ ",
            "∞" => " lõputut ", "♥" => " armastus ", "&" => " Ja ", "+" => " Pluss ", "Š" => "S",
            "Ž" => "Z", "Õ" => "O", "Ä" => "A", "Ö" => "O", "Ü" => "U", "š" => "s", "ž" => "z",
            "õ" => "o", "ä" => "a", "ö" => "o", "ü" => "u",
        ],
        remove: [],

    LAV, "lv", "Latvian",
        map: [
            "=" => " vienāds ", "%" => " procents ", "∑" => " summa ", "∆" => " delta ",
            "∞" => " bezgalība ", "♥" => " mīlestība ", "&" => " un ", "+" => " pluss ",
            "ā" => "a", "č" => "c", "ē" => "e", "ģ" => "g", "ī" => "i", "ķ" => "k", "ļ" => "l",
            "ņ" => "n", "š" => "s", "ū" => "u", "ž" => "z", "Ā" => "A", "Č" => "C", "Ē" => "E",
            "Ģ" => "G", "Ī" => "i", "Ķ" => "k", "Ļ" => "L", "Ņ" => "N", "Š" => "S", "Ū" => "u",
            "Ž" => "Z",
        ],
        remove: [],

    LIT, "lt", "Lithuanian",
        map: [
            "=" => " lygus ", "%" => " procentų ", "∑" => " suma ", "∆" => " delta ",
            "∞" => " begalybė ", "♥" => " meilė ", "&" => " ir ", "+" => " plius ", "ą" => "a",
            "č" => "c", "ę" => "e", "ė" => "e", "į" => "i", "š" => "s", "ų" => "u", "ū" => "u",
            "ž" => "z", "Ą" => "A", "Č" => "C", "Ę" => "E", "Ė" => "E", "Į" => "I", "Š" => "S",
            "Ų" => "U", "Ū" => "U", "Ž" => "Z",
        ],
        remove: [],

    NOR, "no", "Norwegian",
        map: [
            "=" => " Lik ", "%" => " Prosent ", "∑" => " sum ", "∆" => " delta ",
            "∞" => " uendelig ", "♥" => " kjærlighet ", "&" => " Og ", "+" => " Pluss ",
            "Æ" => "AE", "Ø" => "OE", "Å" => "AA", "æ" => "ae", "ø" => "oe", "å" => "aa",
        ],
        remove: [],

    VIE, "vn", "Vietnamese",
        map: [
            "=" => " công bằng ", "%" => " phần trăm ", "∑" => " tổng số ", "∆" => " đồng bằng ",
            "∞" => " vô cực ", "♥" => " Yêu ", "&" => " và ", "+" => " thêm ", "Á" => "A",
            "À" => "A", "Ả" => "A", "Ã" => "A", "Ạ" => "A", "Ă" => "A", "Ắ" => "A", "Ằ" => "A",
            "Ẳ" => "A", "Ẵ" => "A", "Ặ" => "A", "Â" => "A", "Ấ" => "A", "Ầ" => "A", "Ẩ" => "A",
            "Ẫ" => "A", "Ậ" => "A", "á" => "a", "à" => "a", "ả" => "a", "ã" => "a", "ạ" => "a",
            "ă" => "a", "ắ" => "a", "ằ" => "a", "ẳ" => "a", "ẵ" => "a", "ặ" => "a", "â" => "a",
            "ấ" => "a", "ầ" => "a", "ẩ" => "a", "ẫ" => "a", "ậ" => "a", "É" => "E", "È" => "E",
            "Ẻ" => "E", "Ẽ" => "E", "Ẹ" => "E", "Ê" => "E", "Ế" => "E", "Ề" => "E", "Ể" => "E",
            "Ễ" => "E", "Ệ" => "E", "é" => "e", "è" => "e", "ẻ" => "e", "ẽ" => "e", "ẹ" => "e",
            "ê" => "e", "ế" => "e", "ề" => "e", "ể" => "e", "ễ" => "e", "ệ" => "e", "Í" => "I",
            "Ì" => "I", "Ỉ" => "I", "Ĩ" => "I", "Ị" => "I", "í" => "i", "ì" => "i", "ỉ" => "i",
            "ĩ" => "i", "ị" => "i", "Ó" => "O", "Ò" => "O", "Ỏ" => "O", "Õ" => "O", "Ọ" => "O",
            "Ô" => "O", "Ố" => "O", "Ồ" => "O", "Ổ" => "O", "Ỗ" => "O", "Ộ" => "O", "Ơ" => "O",
            "Ớ" => "O", "Ờ" => "O", "Ở" => "O", "Ỡ" => "O", "Ợ" => "O", "ó" => "o", "ò" => "o",
            "ỏ" => "o", "õ" => "o", "ọ" => "o", "ô" => "o", "ố" => "o", "ồ" => "o", "ổ" => "o",
            "ỗ" => "o", "ộ" => "o", "ơ" => "o", "ớ" => "o", "ờ" => "o", "ở" => "o", "ỡ" => "o",
            "ợ" => "o", "Ú" => "U", "Ù" => "U", "Ủ" => "U", "Ũ" => "U", "Ụ" => "U", "Ư" => "U",
            "Ứ" => "U", "Ừ" => "U", "Ử" => "U", "Ữ" => "U", "Ự" => "U", "ú" => "u", "ù" => "u",
            "ủ" => "u", "ũ" => "u", "ụ" => "u", "ư" => "u", "ứ" => "u", "ừ" => "u", "ử" => "u",
            "ữ" => "u", "ự" => "u", "Ý" => "Y", "Ỳ" => "Y", "Ỷ" => "Y", "Ỹ" => "Y", "Ỵ" => "Y",
            "ý" => "y", "ỳ" => "y", "ỷ" => "y", "ỹ" => "y", "ỵ" => "y", "Đ" => "D", "đ" => "d",
        ],
        remove: [],

    ARA, "ar", "Arabic",
        map: [
            "=" => " متساوي ", "%" => " نسبه مئويه ", "∑" => " مجموع ", "∆" => " دلتا ",
            "∞" => " ما لا نهاية ", "♥" => " حب ", "&" => " و ", "+" => " زائد ", "أ" => "a",
            "ب" => "b", "ت" => "t", "ث" => "th", "ج" => "g", "ح" => "h", "خ" => "kh", "د" => "d",
            "ذ" => "th", "ر" => "r", "ز" => "z", "س" => "s", "ش" => "sh", "ص" => "s", "ض" => "d",
            "ط" => "t", "ظ" => "th", "ع" => "aa", "غ" => "gh", "ف" => "f", "ق" => "k",
            "ك" => "k", "ل" => "l", "م" => "m", "ن" => "n", "ه" => "h", "و" => "o", "ي" => "y",
            "ا" => "a", "إ" => "a", "آ" => "a", "ؤ" => "o", "ئ" => "y", "ء" => "aa", "٠" => "0",
            "١" => "1", "٢" => "2", "٣" => "3", "٤" => "4", "٥" => "5", "٦" => "6", "٧" => "7",
            "٨" => "8", "٩" => "9",
        ],
        remove: [],

    FAS, "fa", "Persian",
        map: [
            "=" => " برابر ", "%" => " در صد ", "∑" => " مجموع ", "∆" => " دلتا ",
            "∞" => " بی نهایت ", "♥" => " عشق ", "&" => " و ", "+" => " به علاوه ", "گ" => "g",
            "ژ" => "j", "پ" => "p", "چ" => "ch", "ی" => "y", "ک" => "k", "۰" => "0", "۱" => "1",
            "۲" => "2", "۳" => "3", "۴" => "4", "۵" => "5", "۶" => "6", "۷" => "7", "۸" => "8",
            "۹" => "9",
        ],
        remove: [],

    SRP, "sr", "Serbian",
        map: [
            "=" => " једнак ", "%" => " проценат ", "∑" => " збир ", "∆" => " делта ",
            "∞" => " бескрај ", "♥" => " љубав ", "&" => " и ", "+" => " више ", "ј" => "j",
            "љ" => "lj", "њ" => "nj", "ћ" => "c", "џ" => "dz", "Ј" => "j", "Љ" => "Lj",
            "Њ" => "Nj", "Ћ" => "C", "Џ" => "Dz", "Đ" => "Dj", "Ð" => "Dj", "ð" => "dj",
            "ђ" => "dj", "đ" => "dj", "Ђ" => "Dj", "а" => "a", "б" => "b", "в" => "v",
            "г" => "g", "д" => "d", "е" => "e", "ж" => "z", "з" => "z", "и" => "i", "к" => "k",
            "л" => "l", "м" => "m", "н" => "n", "о" => "o", "п" => "p", "р" => "r", "с" => "s",
            "т" => "t", "у" => "u", "ф" => "f", "х" => "h", "ц" => "c", "ч" => "c", "ш" => "s",
            "А" => "A", "Б" => "B", "В" => "V", "Г" => "G", "Д" => "D", "Е" => "E", "Ж" => "Z",
            "З" => "Z", "И" => "I", "К" => "K", "Л" => "L", "М" => "M", "Н" => "N", "О" => "O",
            "П" => "P", "Р" => "R", "С" => "S", "Т" => "T", "У" => "U", "Ф" => "F", "Х" => "H",
            "Ц" => "C", "Ч" => "C", "Ш" => "S", "š" => "s", "ž" => "z", "ć" => "c", "č" => "c",
            "Š" => "S", "Ž" => "Z", "Ć" => "C", "Č" => "C",
        ],
        remove: [],

    AZE, "az", "Azerbaijani",
        map: [
            "=" => " bərabər ", "%" => " faiz ", "∑" => " məbləğ ", "∆" => " delta ",
            "∞" => " sonsuzluq ", "♥" => " sevgi ", "&" => " və ", "+" => " plus ", "ç" => "c",
            "ə" => "e", "ğ" => "g", "ı" => "i", "ö" => "o", "ş" => "s", "ü" => "u", "Ç" => "C",
            "Ə" => "E", "Ğ" => "G", "İ" => "I", "Ö" => "O", "Ş" => "S", "Ü" => "U",
        ],
        remove: [],

    FRA, "fr", "French",
        map: [
            "=" => " Égal ", "%" => " Pourcentage ", "∑" => " somme ", "∆" => " delta ",
            "∞" => " infini ", "♥" => " amour ", "&" => " Et ", "+" => " Plus ",
        ],
        remove: [
            "a", "of", "in", "on", "aa", "as", "le", "les", "la", "ce", "to",
        ],

    FRA_AT, "fr_at", "French (Austria)",
        map: [
            "=" => " Égal ", "%" => " Pourcentage ", "∑" => " somme ", "∆" => " delta ",
            "∞" => " infini ", "♥" => " amour ", "&" => " Et ", "+" => " Plus ", "ß" => "sz",
            "ẞ" => "SZ",
        ],
        remove: [
            "a", "of", "in", "on", "aa", "as", "le", "les", "la", "ce", "to",
        ],

    FRA_CH, "fr_ch", "French (Switzerland)",
        map: [
            "=" => " Égal ", "%" => " Pourcentage ", "∑" => " somme ", "∆" => " delta ",
            "∞" => " infini ", "♥" => " amour ", "&" => " Et ", "+" => " Plus ", "ß" => "ss",
            "ẞ" => "SS",
        ],
        remove: [
            "a", "of", "in", "on", "aa", "as", "le", "les", "la", "ce", "to",
        ],

    DEU, "de", "German",
        map: [
            "=" => " gleich ", "%" => " Prozent ", "∑" => " gesamt ", "∆" => " Unterschied ",
            "∞" => " undendlich ", "♥" => " liebe ", "&" => " und ", "+" => " plus ",
            "Ä" => "Ae", "Ö" => "Oe", "Ü" => "Ue", "ä" => "ae", "ö" => "oe", "ü" => "ue",
            "ß" => "ss", "ẞ" => "SS",
        ],
        remove: [
            "ein", "eine", "wie", "an", "vor", "aber", "von", "für", "ist", "in", "von", "auf",
            "pro", "da", "als", "der", "die", "das", "dass", "zu", "mit",
        ],

    DEU_AT, "de_at", "German (Austria)",
        map: [
            "=" => " gleich ", "%" => " Prozent ", "∑" => " gesamt ", "∆" => " Unterschied ",
            "∞" => " undendlich ", "♥" => " liebe ", "&" => " und ", "+" => " plus ",
            "Ä" => "AE", "Ö" => "OE", "Ü" => "UE", "ß" => "sz", "ẞ" => "SZ", "ä" => "ae",
            "ö" => "oe", "ü" => "ue",
        ],
        remove: [
            "ein", "eine", "wie", "an", "vor", "aber", "von", "für", "ist", "in", "von", "auf",
            "pro", "da", "als", "der", "die", "das", "dass", "zu", "mit",
        ],

    DEU_CH, "de_ch", "German (Switzerland)",
        map: [
            "=" => " gleich ", "%" => " Prozent ", "∑" => " gesamt ", "∆" => " Unterschied ",
            "∞" => " undendlich ", "♥" => " liebe ", "&" => " und ", "+" => " plus ",
            "Ä" => "Ae", "Ö" => "Oe", "Ü" => "Ue", "ä" => "ae", "ö" => "oe", "ü" => "ue",
            "ß" => "ss", "ẞ" => "SS",
        ],
        remove: [
            "ein", "eine", "wie", "an", "vor", "aber", "von", "für", "ist", "in", "von", "auf",
            "pro", "da", "als", "der", "die", "das", "dass", "zu", "mit",
        ],

    ENG, "en", "English",
        map: [
            "=" => " equal ", "%" => " percent ", "∑" => " sum ", "∆" => " delta ",
            "∞" => " infinity ", "♥" => " love ", "&" => " and ", "+" => " plus ",
        ],
        remove: [
            "a", "an", "as", "at", "before", "but", "by", "for", "from", "is", "in", "into",
            "like", "of", "off", "on", "onto", "per", "since", "than", "the", "this", "that",
            "to", "up", "via", "with",
        ],

    LATIN, "latin", "Latin",
        map: [
            "¹" => "1", "²" => "2", "³" => "3", "⁴" => "4", "⁵" => "5", "⁶" => "6", "⁷" => "7",
            "⁸" => "8", "⁹" => "9", "₀" => "0", "₁" => "1", "₂" => "2", "₃" => "3", "₄" => "4",
            "₅" => "5", "₆" => "6", "₇" => "7", "₈" => "8", "₉" => "9", "æ" => "ae", "ǽ" => "ae",
            "Ä" => "A", "À" => "A", "Á" => "A", "Â" => "A", "Ã" => "A", "Å" => "A", "Ǻ" => "A",
            "Ă" => "A", "Ǎ" => "A", "Æ" => "AE", "Ǽ" => "AE", "ä" => "a", "à" => "a", "á" => "a",
            "â" => "a", "ã" => "a", "å" => "a", "ǻ" => "a", "ă" => "a", "ǎ" => "a", "ª" => "a",
            "Ç" => "C", "Ĉ" => "C", "ç" => "c", "Ċ" => "C", "ĉ" => "c", "ċ" => "c", "Ð" => "D",
            "Đ" => "D", "ð" => "d", "đ" => "d", "È" => "E", "É" => "E", "Ê" => "E", "Ë" => "E",
            "Ĕ" => "E", "Ė" => "E", "è" => "e", "é" => "e", "ê" => "e", "ë" => "e", "ĕ" => "e",
            "ė" => "e", "ƒ" => "f", "Ĝ" => "G", "Ġ" => "G", "ĝ" => "g", "ġ" => "g", "Ĥ" => "H",
            "Ħ" => "H", "ĥ" => "h", "ħ" => "h", "Ì" => "I", "Í" => "I", "Î" => "I", "Ï" => "I",
            "Ĩ" => "I", "Ĭ" => "I", "Ǐ" => "I", "Į" => "I", "Ĳ" => "IJ", "ì" => "i", "í" => "i",
            "î" => "i", "ï" => "i", "ĩ" => "i", "ĭ" => "i", "ǐ" => "i", "į" => "i", "ĳ" => "ij",
            "Ĵ" => "J", "ĵ" => "j", "Ĺ" => "L", "Ľ" => "L", "Ŀ" => "L", "ĺ" => "l", "ľ" => "l",
            "ŀ" => "l", "Ñ" => "N", "ñ" => "n", "ŉ" => "n", "Ö" => "O", "Ò" => "O", "Ó" => "O",
            "Ô" => "O", "Õ" => "O", "Ō" => "O", "Ŏ" => "O", "Ǒ" => "O", "Ő" => "O", "Ơ" => "O",
            "Ø" => "O", "Ǿ" => "O", "Œ" => "OE", "ö" => "o", "ò" => "o", "ó" => "o", "ô" => "o",
            "õ" => "o", "ō" => "o", "ŏ" => "o", "ǒ" => "o", "ő" => "o", "ơ" => "o", "ø" => "o",
            "ǿ" => "o", "º" => "o", "œ" => "oe", "Ŕ" => "R", "Ŗ" => "R", "ŕ" => "r", "ŗ" => "r",
            "Ŝ" => "S", "Ș" => "S", "ŝ" => "s", "ș" => "s", "ſ" => "s", "Ţ" => "T", "Ț" => "T",
            "Ŧ" => "T", "Þ" => "TH", "ţ" => "t", "ț" => "t", "ŧ" => "t", "þ" => "th", "Ü" => "U",
            "Ù" => "U", "Ú" => "U", "Û" => "U", "Ũ" => "U", "Ŭ" => "U", "Ű" => "U", "Ų" => "U",
            "Ư" => "U", "Ǔ" => "U", "Ǖ" => "U", "Ǘ" => "U", "Ǚ" => "U", "Ǜ" => "U", "ü" => "u",
            "ù" => "u", "ú" => "u", "û" => "u", "ũ" => "u", "ŭ" => "u", "ű" => "u", "ų" => "u",
            "ư" => "u", "ǔ" => "u", "ǖ" => "u", "ǘ" => "u", "ǚ" => "u", "ǜ" => "u", "Ŵ" => "W",
            "ŵ" => "w", "Ý" => "Y", "Ÿ" => "Y", "Ŷ" => "Y", "ý" => "y", "ÿ" => "y", "ŷ" => "y",
        ],
        remove: [],

    CURRENCY, "currency", "Currency",
        map: [
            "€" => " Euro ", "$" => " Dollar ", "₢" => " rruzeiro ", "₣" => " french franc ",
            "£" => " pound ", "₤" => " lira ", "₥" => " mill ", "₦" => " naira ",
            "₧" => " peseta ", "₨" => " rupee ", "₩" => " won ", "₪" => " new shequel ",
            "₫" => " dong ", "₭" => " kip ", "₮" => " tugrik ", "₯" => " drachma ",
            "₰" => " penny ", "₱" => " peso ", "₲" => " guarani ", "₳" => " austral ",
            "₴" => " hryvnia ", "₵" => " cedi ", "¢" => " cent ", "¥" => " yen ",
            "元" => " yuan ", "円" => " yen ", "﷼" => " rial ", "₠" => " ecu ",
            "¤" => " currency ", "฿" => " baht ",
        ],
        remove: [],

    LATIN_SYMBOLS, "latin_symbols", "Latin symbols",
        map: [
            "©" => " (c) ", "®" => " (r) ", "@" => " (at) ", "=" => "=", "%" => "%", "∑" => "∑",
            "∆" => "∆", "∞" => "∞", "♥" => "♥", "&" => "&", "+" => "+",
        ],
        remove: [],
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_table_is_reachable_by_code() {
        for lang in REGISTRY_ORDER {
            let entry = LANG_TABLE.get(lang.code()).expect("table registered");
            assert_eq!(entry.lang, *lang);
            assert_eq!(from_code(lang.code()), Some(*lang));
        }
        assert_eq!(REGISTRY_ORDER.len(), LANG_TABLE.len());
    }

    #[test]
    fn categories_come_last() {
        let tail: Vec<_> = REGISTRY_ORDER.iter().rev().take(3).map(|l| l.code()).collect();
        assert_eq!(tail, ["latin_symbols", "currency", "latin"]);
    }

    #[test]
    fn keys_are_unique_within_a_table() {
        for lang in REGISTRY_ORDER {
            let map = LANG_TABLE[lang.code()].map;
            let keys: HashSet<_> = map.iter().map(|(k, _)| *k).collect();
            assert_eq!(keys.len(), map.len(), "duplicate key in {}", lang.code());
        }
    }

    #[test]
    fn conflicting_umlauts() {
        let de = LANG_TABLE["de"].map;
        let tr = LANG_TABLE["tr"].map;
        assert!(de.contains(&("ö", "oe")));
        assert!(tr.contains(&("ö", "o")));
    }

    #[test]
    fn remove_word_defaults() {
        assert!(LANG_TABLE["en"].remove_words.contains(&"the"));
        assert!(LANG_TABLE["de"].remove_words.contains(&"der"));
        assert!(LANG_TABLE["ru"].remove_words.is_empty());
        assert!(LANG_TABLE["latin"].remove_words.is_empty());
    }

    #[test]
    fn from_code_is_case_insensitive() {
        assert_eq!(from_code("DE"), Some(DEU));
        assert_eq!(from_code("de_AT"), Some(DEU_AT));
        assert_eq!(from_code("xx"), None);
    }
}
