//! Built-in seed-word banks, one per supported language.
//!
//! Immutable once built. Duplicate entries are collapsed on construction so
//! sampling without replacement always yields distinct words.

use std::collections::HashMap;

use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;

use crate::poetry::types::Language;

#[derive(Debug, Error, PartialEq)]
pub enum VocabularyError {
    #[error("no word bank for language {0}")]
    UnknownLanguage(String),

    #[error("word bank for {language} has {available} words, {requested} requested")]
    TooFewWords {
        language: String,
        available: usize,
        requested: usize,
    },
}

#[derive(Debug, Clone, Default)]
pub struct VocabularyBank {
    banks: HashMap<Language, Vec<String>>,
}

impl VocabularyBank {
    pub fn new<I, W>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Language, W)>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        let banks = entries
            .into_iter()
            .map(|(language, words)| {
                let mut unique: Vec<String> = Vec::new();
                for word in words {
                    let word = word.into();
                    if !unique.contains(&word) {
                        unique.push(word);
                    }
                }
                (language, unique)
            })
            .collect();

        Self { banks }
    }

    /// The word lists shipped with the dataset builder.
    pub fn builtin() -> Self {
        Self::new([
            (Language::English, ENGLISH_WORDS.iter().copied()),
            (Language::German, GERMAN_WORDS.iter().copied()),
            (Language::Hindi, HINDI_WORDS.iter().copied()),
            (Language::Russian, RUSSIAN_WORDS.iter().copied()),
            (Language::Chinese, CHINESE_WORDS.iter().copied()),
        ])
    }

    pub fn words(&self, language: &Language) -> Option<&[String]> {
        self.banks.get(language).map(Vec::as_slice)
    }

    /// Picks `count` distinct words uniformly without replacement.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        language: &Language,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>, VocabularyError> {
        let bank = self
            .words(language)
            .ok_or_else(|| VocabularyError::UnknownLanguage(language.to_string()))?;

        if bank.len() < count {
            return Err(VocabularyError::TooFewWords {
                language: language.to_string(),
                available: bank.len(),
                requested: count,
            });
        }

        Ok(bank.choose_multiple(rng, count).cloned().collect())
    }
}

const ENGLISH_WORDS: &[&str] = &[
    "river", "leaf", "dawn", "shadow", "mountain", "forest", "ocean", "flame", "dust",
    "breath", "sky", "stone", "storm", "valley", "meadow", "tide", "wind", "snow", "rain",
    "cloud", "thunder", "lightning", "mist", "fog", "sunset", "sunrise", "twilight",
    "star", "moon", "sun", "earth", "grass", "flower", "tree", "branch", "root", "seed",
    "bloom", "petal", "thorn", "stream", "lake", "pond", "wave", "shore", "sand", "cliff",
    "hill", "garden", "field", "plain", "desert", "island", "glacier", "canyon", "love",
    "hope", "fear", "joy", "sorrow", "pain", "peace", "dream", "memory", "whisper",
    "silence", "echo", "song", "tale", "story", "word", "thought", "soul", "heart",
    "spirit", "longing", "desire", "passion", "grief", "tears", "laughter", "smile",
    "touch", "embrace", "kiss", "prayer", "wish", "promise", "secret", "truth", "lie",
    "faith", "doubt", "moment", "eternity", "hour", "season", "year", "century",
    "yesterday", "tomorrow", "forever", "never", "always", "sometimes", "distance",
    "journey", "path", "road", "bridge", "door", "window", "threshold", "mirror",
    "candle", "lantern", "feather", "shell", "pearl", "diamond", "iron", "silver", "gold",
    "bronze", "marble", "glass", "crystal", "book", "page", "ink", "quill", "letter",
    "sword", "shield", "crown", "ring", "chain", "thread", "cloth", "veil", "mask",
    "shadow", "light", "fire", "water", "air", "ice", "smoke", "ash", "embers", "spark",
];

const GERMAN_WORDS: &[&str] = &[
    "Regen", "Fenster", "Nacht", "Licht", "Herz", "Wald", "Fluss", "Stille", "Traum",
    "Abschied", "Himmel", "Stern", "Mond", "Sonne", "Wind", "Schnee", "Nebel", "Berg",
    "Tal", "Meer", "Welle", "Strand", "Baum", "Blatt", "Blume", "Rose", "Gras", "Wiese",
    "Feld", "Garten", "Erde", "Stein", "Fels", "Quelle", "Bach", "See", "Wolke", "Donner",
    "Blitz", "Sturm", "Liebe", "Sehnsucht", "Schmerz", "Freude", "Trauer", "Hoffnung",
    "Angst", "Frieden", "Seele", "Geist", "Gedanke", "Erinnerung", "Vergessen",
    "Schweigen", "Stimme", "Lied", "Musik", "Wort", "Sprache", "Geschichte", "Märchen",
    "Wahrheit", "Lüge", "Glaube", "Zweifel", "Gebet", "Wunsch", "Versprechen",
    "Geheimnis", "Träne", "Lächeln", "Kuss", "Umarmung", "Zeit", "Stunde", "Moment",
    "Augenblick", "Ewigkeit", "Gestern", "Morgen", "Heute", "Jahr", "Jahrhundert",
    "Jahreszeit", "Frühling", "Sommer", "Herbst", "Winter", "Dämmerung", "Morgenrot",
    "Mitternacht", "Weg", "Pfad", "Straße", "Brücke", "Tür", "Schwelle", "Reise", "Ferne",
    "Nähe", "Spiegel", "Kerze", "Laterne", "Feder", "Muschel", "Perle", "Diamant",
    "Silber", "Gold", "Eisen", "Glas", "Kristall", "Buch", "Seite", "Tinte", "Brief",
    "Schwert", "Schild", "Krone", "Ring", "Kette", "Faden", "Tuch", "Schleier", "Maske",
    "Schatten", "Feuer", "Wasser", "Luft", "Eis", "Rauch", "Asche", "Glut", "Funke",
    "Flamme",
];

const HINDI_WORDS: &[&str] = &[
    "चाँद", "सपना", "स्पर्श", "नदी", "रात", "याद", "हवा", "धूप", "समुद्र", "पत्ते", "फूल",
    "पेड़", "जंगल", "पहाड़", "घाटी", "आकाश", "तारे", "सूरज", "बादल", "बारिश", "बर्फ",
    "कोहरा", "तूफान", "लहर", "किनारा", "रेत", "घास", "बगीचा", "खेत", "झील", "झरना",
    "पानी", "पत्थर", "चट्टान", "प्यार", "दर्द", "खुशी", "गम", "उम्मीद", "डर", "शांति",
    "सपने", "यादें", "आँसू", "मुस्कान", "हँसी", "चुंबन", "आलिंगन", "छुअन", "आत्मा", "दिल",
    "मन", "विचार", "भावना", "लालसा", "इच्छा", "प्रार्थना", "इच्छा", "वादा", "रहस्य", "सच",
    "झूठ", "विश्वास", "संदेह", "समय", "पल", "क्षण", "अनंतता", "कल", "आज", "सदा", "कभी",
    "मौसम", "वसंत", "गर्मी", "सर्दी", "पतझड़", "सुबह", "शाम", "संध्या", "मध्यरात्रि",
    "रास्ता", "मार्ग", "सड़क", "पुल", "दरवाजा", "खिड़की", "दूरी", "यात्रा", "दर्पण",
    "मोमबत्ती", "लालटेन", "पंख", "सीप", "मोती", "हीरा", "चांदी", "सोना", "लोहा", "शीशा",
    "क्रिस्टल", "किताब", "पन्ना", "स्याही", "पत्र", "तलवार", "ढाल", "मुकुट", "अंगूठी",
    "जंजीर", "धागा", "कपड़ा", "घूंघट", "मुखौटा", "छाया", "रोशनी", "आग", "बर्फ", "धुआं",
    "राख", "चिंगारी", "ज्वाला", "प्रकाश", "अंधकार", "गीत", "संगीत", "शब्द", "कहानी",
];

const RUSSIAN_WORDS: &[&str] = &[
    "туман", "путь", "сердце", "река", "ветер", "память", "ночь", "звёзды", "лист",
    "окно", "небо", "луна", "солнце", "дождь", "снег", "облако", "гром", "молния", "буря",
    "лес", "гора", "долина", "море", "волна", "берег", "песок", "дерево", "цветок",
    "роза", "трава", "поле", "сад", "земля", "камень", "скала", "ручей", "озеро", "вода",
    "источник", "любовь", "мечта", "боль", "радость", "печаль", "надежда", "страх",
    "покой", "душа", "дух", "мысль", "воспоминание", "забвение", "молчание", "голос",
    "песня", "музыка", "слово", "речь", "история", "сказка", "правда", "ложь", "вера",
    "сомнение", "молитва", "желание", "обещание", "тайна", "слеза", "улыбка", "смех",
    "поцелуй", "объятие", "прикосновение", "время", "час", "миг", "мгновение", "вечность",
    "вчера", "завтра", "сегодня", "год", "век", "сезон", "весна", "лето", "осень", "зима",
    "рассвет", "закат", "сумерки", "полночь", "дорога", "тропа", "улица", "мост", "дверь",
    "порог", "путешествие", "даль", "близость", "расстояние", "зеркало", "свеча",
    "фонарь", "перо", "ракушка", "жемчуг", "алмаз", "серебро", "золото", "железо",
    "стекло", "кристалл", "книга", "страница", "чернила", "письмо", "меч", "щит",
    "корона", "кольцо", "цепь", "нить", "ткань", "вуаль", "маска", "тень", "свет",
    "огонь", "лёд", "дым", "пепел", "уголь", "искра", "пламя", "заря", "мрак", "тишина",
    "эхо", "отражение",
];

const CHINESE_WORDS: &[&str] = &[
    "山谷", "雨声", "绿叶", "星光", "河流", "夜色", "清风", "花瓣", "黎明", "云朵", "月亮", "太阳", "天空", "星星",
    "雨水", "雪花", "雾气", "雷声", "闪电", "风暴", "森林", "山峰", "海洋", "波浪", "沙滩", "草地", "田野", "花园",
    "大地", "石头", "岩石", "溪流", "湖泊", "泉水", "树木", "枝条", "根须", "种子", "花朵", "玫瑰", "荆棘", "秋叶",
    "春芽", "爱情", "梦想", "痛苦", "欢乐", "悲伤", "希望", "恐惧", "宁静", "灵魂", "心灵", "思想", "记忆", "遗忘",
    "沉默", "声音", "歌声", "音乐", "语言", "故事", "童话", "真相", "谎言", "信仰", "怀疑", "祈祷", "愿望", "诺言",
    "秘密", "眼泪", "微笑", "笑声", "亲吻", "拥抱", "触摸", "渴望", "激情", "时光", "时刻", "瞬间", "永恒", "昨日",
    "明天", "今天", "岁月", "世纪", "季节", "春天", "夏日", "秋季", "冬天", "日出", "日落", "黄昏", "午夜", "道路",
    "小径", "街道", "桥梁", "门户", "窗户", "门槛", "旅程", "远方", "距离", "空间", "镜子", "蜡烛", "灯笼", "羽毛",
    "贝壳", "珍珠", "钻石", "白银", "黄金", "铁器", "玻璃", "水晶", "书籍", "纸页", "墨水", "信件", "刀剑", "盾牌",
    "王冠", "戒指", "锁链", "丝线", "布匹", "面纱", "面具", "影子", "光芒", "火焰", "冰霜", "烟雾", "灰烬", "火花",
    "余烬", "曙光", "暗夜", "回声", "倒影", "露珠", "霜降", "晨曦", "暮色",
];
