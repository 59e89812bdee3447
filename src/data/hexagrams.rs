//! The 64 hexagrams in their two views.
//!
//! The natural view walks the Shao Yong square: index `i * 8 + j` stacks
//! upper trigram `BINARY_ORDER[j]` on lower trigram `BINARY_ORDER[i]`. The
//! King-Wen view renumbers the same figures and finds their structure by
//! name.

use super::trigrams::{BINARY_ORDER, TRIGRAMS};
use crate::core::{HexagramId, Locale, TrigramId};

/// Static attributes of a hexagram within one view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hexagram {
    pub id: HexagramId,
    pub name: &'static str,
    pub name_en: &'static str,
    pub pinyin: &'static str,
    /// Judgment text (卦辞).
    pub judgment: &'static str,
    pub explanation: &'static str,
    pub upper: TrigramId,
    pub lower: TrigramId,
    /// Line states, bottom to top.
    pub lines: [u8; 6],
}

impl Hexagram {
    #[must_use]
    pub fn name(&self, locale: Locale) -> &'static str {
        locale.pick(self.name, self.name_en)
    }
}

/// `(name, pinyin, judgment, explanation, english name)`.
type Details = (&'static str, &'static str, &'static str, &'static str, &'static str);

static DETAILS: [Details; 64] = [
    ("乾", "Qián", "元，亨，利，贞。", "天行健，君子以自强不息。象征刚健进取。", "The Creative. Perseverance furthers."),
    ("坤", "Kūn", "元，亨，利牝马之贞。", "地势坤，君子以厚德载物。象征包容承载。", "The Receptive. Sublime success."),
    ("屯", "Zhūn", "元，亨，利，贞。", "草木初生，艰难而充满生机。", "Difficulty at the Beginning."),
    ("蒙", "Méng", "亨。匪我求童蒙。", "启蒙教育，旨在教化无知。", "Youthful Folly."),
    ("需", "Xū", "有孚，光亨。", "等待时机，饮食宴乐以待变化。", "Waiting (Nourishment)."),
    ("讼", "Sòng", "有孚，窒，惕。", "慎对争执，凡事预则立，和为贵。", "Conflict."),
    ("师", "Shī", "贞，丈人吉。", "兵众之事，需以正义和纪律统领。", "The Army."),
    ("比", "Bǐ", "吉。原筮。", "亲近辅佐，上下团结一致。", "Holding Together (Union)."),
    ("小畜", "Xiǎo Xù", "亨。密云不雨。", "积蓄微小，力量尚不足以大成。", "The Taming Power of the Small."),
    ("履", "Lǚ", "履虎尾，不咥人。", "如履薄冰，礼仪之规范与审慎。", "Treading (Conduct)."),
    ("泰", "Tài", "小往大来，吉。", "天地交泰，阴阳和谐，万事顺遂。", "Peace."),
    ("否", "Pǐ", "否之匪人。", "阴阳不交，闭塞不通，艰难时期。", "Standstill (Stagnation)."),
    ("同人", "Tóng Rén", "同人于野。", "天下大同，志同道合，广结善缘。", "Fellowship with Men."),
    ("大有", "Dà Yǒu", "元亨。", "如日中天，大获所有，富有而德高。", "Possession in Great Measure."),
    ("谦", "Qiān", "亨，君子有终。", "卑以自牧，谦逊待人，最终获吉。", "Modesty."),
    ("豫", "Yù", "利建侯行师。", "和悦安乐，居安思危，提前准备。", "Enthusiasm."),
    ("随", "Suí", "元亨，利贞。", "顺时而动，随时而迁，不固执己见。", "Following."),
    ("蛊", "Gǔ", "元亨。", "整治腐败，拨乱反正，革故鼎新。", "Work on what has been spoiled."),
    ("临", "Lín", "元亨，利贞。", "以上临下，亲民视事，充满希望。", "Approach."),
    ("观", "Guān", "盥而不荐。", "观察思考，垂范后人，静观其变。", "Contemplation (View)."),
    ("噬嗑", "Shì Hé", "亨。利用狱。", "咬合障碍，严明法度，惩治不公。", "Biting Through."),
    ("贲", "Bì", "亨。小利有攸往。", "文饰装点，质朴与华美的平衡。", "Grace."),
    ("剥", "Bō", "不利有攸往。", "剥落倾覆，阳气消尽，需持重。", "Splitting Apart."),
    ("复", "Fù", "亨。出入无疾。", "生机重现，一阳来复，万物复苏。", "Return (The Turning Point)."),
    ("无妄", "Wú Wàng", "元亨，利贞。", "真实无欺，顺应自然，不求妄想。", "Innocence (The Unexpected)."),
    ("大畜", "Dà Xù", "利贞。", "大量积蓄，蓄德养才，志向高远。", "The Taming Power of the Great."),
    ("颐", "Yí", "贞吉。", "颐养之道，注意言行，自求口实。", "Corners of the Mouth (Providing Nourishment)."),
    ("大过", "Dà Guò", "栋桡，亨。", "重大变革，非常之才，承担重任。", "Preponderance of the Great."),
    ("坎", "Kǎn", "习坎，有孚。", "重重险阻，心中诚信，行而有获。", "The Abysmal (Water)."),
    ("离", "Lí", "利贞，亨。", "附着光明，智慧洞察，内心依傍。", "The Clinging, Fire."),
    ("咸", "Xián", "亨，利贞。", "相互感应，至诚相待，婚姻美满。", "Influence (Wooing)."),
    ("恒", "Héng", "亨，无咎。", "持之以恒，守正不渝，长久之道。", "Duration."),
    ("遁", "Dùn", "亨，小利贞。", "隐退保存，不宜进取，明哲保身。", "Retreat."),
    ("大壮", "Dà Zhuàng", "利贞。", "阳刚盛大，严于律己，不可轻举。", "The Power of the Great."),
    ("晋", "Jìn", "康侯用锡马。", "积极进取，如日升空，德望日增。", "Progress."),
    ("明夷", "Míng Yí", "利艰贞。", "光明受损，隐忍智慧，内心清明。", "Darkening of the Light."),
    ("家人", "Jiā Rén", "利女贞。", "治家有方，伦理有序，内外有别。", "The Family."),
    ("睽", "Kuí", "小事吉。", "异中求同，和而不同，矛盾中寻契机。", "Opposition."),
    ("蹇", "Jiǎn", "利西南。", "跋涉艰难，反求诸己，寻求援手。", "Obstruction."),
    ("解", "Xiè", "利西南。", "缓解压力，灾难消散，宜休养。", "Deliverance."),
    ("损", "Sǔn", "有孚，元吉。", "减损欲望，增益内涵，损益相依。", "Decrease."),
    ("益", "Yì", "利有攸往。", "造福大众，自我提升，积极进取。", "Increase."),
    ("夬", "Guài", "扬于王庭。", "果断决策，剪除邪恶，正义伸张。", "Break-through (Resoluteness)."),
    ("姤", "Gòu", "女壮。", "邂逅相遇，柔能克刚，警惕微变。", "Coming to Meet."),
    ("萃", "Cuì", "亨。", "精英荟萃，团结凝聚，祭祀先祖。", "Gathering Together (Massing)."),
    ("升", "Shēng", "元亨。", "顺势上升，积小成大，寻求助力。", "Pushing Upward."),
    ("困", "Kùn", "亨，贞。", "身处逆境，守正不挠，言辞不信。", "Oppression (Exhaustion)."),
    ("井", "Jǐng", "改邑不改井。", "泉源不竭，服务大众，修德为本。", "The Well."),
    ("革", "Gé", "已日乃孚。", "顺应天命，改弦更张，革新旧俗。", "Revolution (Molting)."),
    ("鼎", "Dǐng", "元吉，亨。", "革故鼎新，稳重权威，任用贤能。", "The Cauldron."),
    ("震", "Zhèn", "亨。", "雷霆震撼，警醒自省，处变不惊。", "The Arousing (Shock, Thunder)."),
    ("艮", "Gèn", "艮其背。", "止其当止，知行合一，内心安静。", "Keeping Still, Mountain."),
    ("渐", "Jiàn", "女归吉。", "循序渐进，持之以恒，必有大成。", "Development (Gradual Progress)."),
    ("归妹", "Guī Mèi", "征凶。", "少女出嫁，不循法度，慎终追远。", "The Marrying Maiden."),
    ("丰", "Fēng", "亨，王假之。", "丰盛盛大，日中必昃，居安善思。", "Abundance (Fullness)."),
    ("旅", "Lǚ", "小亨。", "羁旅漂泊，守持正道，小心行事。", "The Wanderer."),
    ("巽", "Xùn", "小亨。", "顺从渗透，无孔不入，重申法度。", "The Gentle (The Penetrating, Wind)."),
    ("兑", "Duì", "亨，利贞。", "喜悦交流，和睦待人，诚信为本。", "The Joyous, Lake."),
    ("涣", "Huàn", "亨。", "人心涣散，凝聚力量，破除隔阂。", "Dispersion (Dissolution)."),
    ("节", "Jié", "亨。", "节制适度，遵守规则，不可过苦。", "Limitation."),
    ("中孚", "Zhōng Fú", "豚鱼吉。", "至诚感物，内心诚信，万事亨通。", "Inner Truth."),
    ("小过", "Xiǎo Guò", "亨，利贞。", "微有过失，小事可行，注意细节。", "Preponderance of the Small."),
    ("既济", "Jì Jì", "亨，小利贞。", "功德圆满，慎终如始，防患未然。", "After Completion."),
    ("未济", "Wèi Jì", "亨。", "事业未竟，充满希望，继续努力。", "Before Completion."),
];

/// Names in natural order (Shao Yong square, row = lower trigram).
pub const NATURAL_NAMES: [&str; 64] = [
    "坤", "剥", "比", "观", "豫", "晋", "萃", "否",
    "谦", "艮", "蹇", "渐", "小过", "旅", "咸", "遁",
    "师", "蒙", "坎", "涣", "解", "未济", "困", "讼",
    "升", "蛊", "井", "巽", "恒", "鼎", "大过", "姤",
    "复", "颐", "屯", "益", "震", "噬嗑", "随", "无妄",
    "明夷", "贲", "既济", "家人", "丰", "离", "革", "同人",
    "临", "损", "节", "中孚", "归妹", "睽", "兑", "履",
    "泰", "大畜", "需", "小畜", "大壮", "大有", "夬", "乾",
];

/// Names in King-Wen order. Also the order of [`DETAILS`].
pub const KING_WEN_NAMES: [&str; 64] = [
    "乾", "坤", "屯", "蒙", "需", "讼", "师", "比", "小畜", "履",
    "泰", "否", "同人", "大有", "谦", "豫", "随", "蛊", "临", "观",
    "噬嗑", "贲", "剥", "复", "无妄", "大畜", "颐", "大过", "坎", "离",
    "咸", "恒", "遁", "大壮", "晋", "明夷", "家人", "睽", "蹇", "解",
    "损", "益", "夬", "姤", "萃", "升", "困", "井", "革", "鼎",
    "震", "艮", "渐", "归妹", "丰", "旅", "巽", "兑", "涣", "节",
    "中孚", "小过", "既济", "未济",
];

fn details(name: &str) -> Option<&'static Details> {
    DETAILS.iter().find(|d| d.0 == name)
}

fn trigram_lines(id: TrigramId) -> [u8; 3] {
    TRIGRAMS
        .iter()
        .find(|t| t.id == id)
        .map_or([0; 3], |t| t.lines)
}

fn stack(lower: TrigramId, upper: TrigramId) -> [u8; 6] {
    let [a, b, c] = trigram_lines(lower);
    let [d, e, f] = trigram_lines(upper);
    [a, b, c, d, e, f]
}

fn build(id: HexagramId, name: &'static str, lower: TrigramId, upper: TrigramId) -> Hexagram {
    let (pinyin, judgment, explanation, name_en) = match details(name) {
        Some(&(_, p, j, e, en)) => (p, j, e, en),
        None => ("", "", "", name),
    };
    Hexagram {
        id,
        name,
        name_en,
        pinyin,
        judgment,
        explanation,
        upper,
        lower,
        lines: stack(lower, upper),
    }
}

/// Build the natural-order view.
#[must_use]
pub fn natural_order() -> Vec<Hexagram> {
    NATURAL_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let lower = BINARY_ORDER[index / 8];
            let upper = BINARY_ORDER[index % 8];
            build(HexagramId::natural(index as u16), *name, lower, upper)
        })
        .collect()
}

/// Build the King-Wen view, taking each figure's structure from `natural`.
#[must_use]
pub fn king_wen_order(natural: &[Hexagram]) -> Vec<Hexagram> {
    KING_WEN_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let (lower, upper) = natural
                .iter()
                .find(|h| h.name == *name)
                .map_or((TrigramId::Qian, TrigramId::Qian), |h| (h.lower, h.upper));
            build(HexagramId::king_wen(index as u16), *name, lower, upper)
        })
        .collect()
}
