//! Idioms drawn from the I Ching, for the read-only browsing mode.

use crate::core::{HexagramId, Locale};

/// An idiom and the King-Wen hexagram it comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Idiom {
    pub text: &'static str,
    pub text_en: &'static str,
    pub hexagram: HexagramId,
    pub origin: &'static str,
    pub origin_en: &'static str,
}

impl Idiom {
    #[must_use]
    pub fn text(&self, locale: Locale) -> &'static str {
        locale.pick(self.text, self.text_en)
    }

    #[must_use]
    pub fn origin(&self, locale: Locale) -> &'static str {
        locale.pick(self.origin, self.origin_en)
    }
}

const fn idiom(
    text: &'static str,
    text_en: &'static str,
    king_wen_index: u16,
    origin: &'static str,
    origin_en: &'static str,
) -> Idiom {
    Idiom {
        text,
        text_en,
        hexagram: HexagramId::king_wen(king_wen_index),
        origin,
        origin_en,
    }
}

pub static IDIOMS: [Idiom; 64] = [
    idiom("自强不息", "Self-Improvement", 0, "《乾·象传》：天行健，君子以自强不息。", "The Creative. The superior man makes himself strong."),
    idiom("厚德载物", "Profound Virtue", 1, "《坤·象传》：地势坤，君子以厚德载物。", "The Receptive. The superior man supports all with virtue."),
    idiom("潜龙勿用", "Hidden Dragon", 0, "《乾·初九》：潜龙勿用。", "Hidden dragon. Do not act."),
    idiom("亢龙有悔", "Arrogant Dragon", 0, "《乾·上九》：上九，亢龙有悔。", "Arrogant dragon will have cause to repent."),
    idiom("朝乾夕惕", "Daily Vigilance", 0, "《乾·九三》：君子终日乾乾，夕惕若。", "Active all day, vigilant at night."),
    idiom("积善余庆", "Accumulated Good", 1, "《坤·文言》：积善之家，必有余庆。", "House that accumulates good will have surplus joy."),
    idiom("见微知著", "Recognize the Slight", 1, "《坤·文言》：履霜，坚冰至。", "When there is hoarfrost, solid ice is near."),
    idiom("龙战于野", "Dragons Battle", 1, "《坤·上六》：龙战于野，其血玄黄。", "Dragons fight in the meadow. Their blood is black and yellow."),
    idiom("防微杜渐", "Nip in the Bud", 1, "《坤·初六》：履霜坚冰至。", "Prevent problems while they are small."),
    idiom("黄裳元吉", "Yellow Robe", 1, "《坤·六五》：黄裳元吉。", "A yellow lower garment brings supreme good fortune."),
    idiom("不速之客", "Uninvited Guest", 4, "《需·上六》：有不速之客三人来。", "Three uninvited guests arrive."),
    idiom("履险如夷", "Walk on Danger", 9, "《履·象传》：幽人贞吉，中不自乱。", "Treading as if on flat ground despite danger."),
    idiom("否极泰来", "Peace follows Standstill", 10, "《否/泰》：事物发展到极端必会逆转。", "When the bad ends, the good begins."),
    idiom("三阳开泰", "Three Yangs Bring Peace", 10, "《泰》：万象更新。", "The spring returns with all things fresh."),
    idiom("谦谦君子", "Modest Superior Man", 14, "《谦·初六》：谦谦君子，用涉大川。", "A modest man may cross the great water."),
    idiom("出入无疾", "No Illness Going Out", 23, "《复·卦辞》：出入无疾，朋来无咎。", "Coming and going without illness."),
    idiom("虎视眈眈", "Tiger Glaring", 26, "《颐·六四》：虎视眈眈，其欲逐逐。", "Glaring like a tiger with insatiable desire."),
    idiom("枯杨生稊", "New Shoots on Dry Tree", 27, "《大过·九二》：枯杨生稊。", "A withered willow puts forth new shoots."),
    idiom("突如其来", "Sudden Arrival", 29, "《离·九四》：突如其来如，焚如。", "It comes suddenly, like fire."),
    idiom("见险而止", "Stop at Danger", 38, "《蹇·彖传》：见险而止，知矣哉。", "To stop when danger is seen is true wisdom."),
    idiom("改邑不改井", "Change Village not Well", 47, "《井·卦辞》：改邑不改井。", "The village may be moved, but not the well."),
    idiom("革故鼎新", "Reform and Renewal", 48, "《革/鼎》：废除旧制，建立新象。", "Remove the old and establish the new."),
    idiom("洗心革面", "Wash Heart Change Face", 48, "《革·象传》：小人革面。", "The inferior man changes his face (reforms)."),
    idiom("君子豹变", "Leopard Change", 48, "《革·上六》：君子豹变。", "The superior man changes like a leopard."),
    idiom("涣然冰释", "Melt Like Ice", 58, "《涣·卦辞》：涣，亨。", "Doubts melt away like thawing ice."),
    idiom("信及豚鱼", "Faith to Fish", 60, "《中孚·卦辞》：中孚，豚鱼吉。", "Truth reaches even to pigs and fishes."),
    idiom("错综复杂", "Interwoven and Complex", 63, "《系辞上》：错综其数。", "Intricate and complicated patterns."),
    idiom("殊途同归", "Different Paths Same Goal", 63, "《系辞下》：天下同归而殊途。", "All paths lead to the same destination."),
    idiom("乐天知命", "Content with Fate", 63, "《系辞上》：乐天知命，故不忧。", "Joyful in heaven, aware of destiny."),
    idiom("物以类聚", "Things Flock Together", 63, "《系辞上》：方以类聚，物以群分。", "Like attracts like."),
    idiom("穷则思变", "Change in Adversity", 63, "《系辞下》：穷则变，变则通。", "When at an impasse, change occurs."),
    idiom("触类旁通", "Analogy and Insight", 63, "《系辞上》：触类而长之。", "Understanding one thing leads to many."),
    idiom("极数知来", "Knowing the Future", 63, "《系辞上》：极数知来。", "Reaching the numbers to know the future."),
    idiom("安不忘危", "Safe not Forgetting Peril", 63, "《系辞下》：安而不忘危。", "Stay alert even when secure."),
    idiom("原始要终", "Trace the End", 63, "《系辞下》：原始要终。", "Trace the beginning to know the end."),
    idiom("开物成务", "Fulfill Tasks", 63, "《系辞上》：开物成务。", "Opening up things to accomplish tasks."),
    idiom("神机妙算", "Divine Calculation", 63, "《系辞下》：知微知彰。", "Profound foresight and planning."),
    idiom("以此类推", "And so On", 63, "《系辞下》：引而伸之。", "Extending by analogy."),
    idiom("刚柔并济", "Balance Firm and Soft", 63, "《系辞上》：刚柔相推。", "The firm and soft interact."),
    idiom("神而明之", "Divine Understanding", 63, "《系辞上》：神而明之。", "Profoundly understanding and applying."),
    idiom("蒙以养正", "Correct Nourishment", 3, "《蒙·彖传》：蒙以养正。", "Cultivating correctness in the young."),
    idiom("密云不雨", "Clouds but No Rain", 8, "《小畜·卦辞》：密云不雨。", "Dense clouds, no rain."),
    idiom("如履薄冰", "Treading on Thin Ice", 9, "《履·九四》：履虎尾，愬愬终吉。", "Treading as if on thin ice."),
    idiom("同人于野", "Fellowship in the Open", 12, "《同人·卦辞》：同人于野。", "Fellowship with men in the open."),
    idiom("自天佑之", "Heaven Blesses", 13, "《大有·上九》：自天佑之。", "Blessing from heaven."),
    idiom("卑以自牧", "Self-Cultivation in Humility", 14, "《谦·象传》：卑以自牧。", "Keeping oneself in check through humility."),
    idiom("雷出地奋", "Thunder Arouses", 15, "《豫·象传》：雷出地奋。", "Thunder comes forth from the earth."),
    idiom("随时之义", "Meaning of Time", 16, "《随·彖传》：随时之义。", "The meaning of the time is great."),
    idiom("拨乱反正", "Rectify Chaos", 17, "《蛊·象传》：振民育德。", "Restoring order from chaos."),
    idiom("观国之光", "View Glory of Kingdom", 19, "《观·六四》：观国之光。", "Viewing the glory of the kingdom."),
    idiom("刚柔相济", "Firm Soft Interplay", 63, "《系辞传》：刚柔相推。", "Interplay of firm and soft."),
    idiom("一阳来复", "Return of the One Yang", 23, "《复·卦辞》：七日来复。", "The return of light."),
    idiom("多识前言", "Extensive Learning", 25, "《大畜·象传》：多识前言。", "Acquiring knowledge of the past."),
    idiom("颐养天年", "Nourish Life", 26, "《颐·卦辞》：观颐。", "Nourishing oneself properly."),
    idiom("独立不惧", "Fearless Independence", 27, "《大过·象传》：独立不惧。", "Standing alone without fear."),
    idiom("化成天下", "Transform the World", 21, "《贲·彖传》：化成天下。", "Transforming and completing the world."),
    idiom("慎终如始", "Careful to the End", 62, "《既济·象传》：慎终如始。", "Caring for the end as for the beginning."),
    idiom("终日乾乾", "Active All Day", 0, "《乾·九三》：终日乾乾。", "Creative and active all day."),
    idiom("知微知彰", "Knowing the Small and Clear", 63, "《系辞下》：知微知彰。", "Knowing both the minute and the manifest."),
    idiom("舍尔灵龟", "Abandon the Magic Tortoise", 26, "《颐·初九》：舍尔灵龟。", "Abandoning your own magic tortoise."),
    idiom("进德修业", "Improve Virtue", 0, "《乾·文言》：进德修业。", "Advancing in virtue and work."),
    idiom("损益相间", "Increase and Decrease", 40, "《损·益》：损益，盛衰之始。", "Alternating loss and gain."),
    idiom("精义入神", "Profound Meaning", 63, "《系辞下》：精义入神。", "Essential meaning penetrates the spirit."),
    idiom("有备无患", "Prepared No Peril", 15, "《豫·象传》：有备无患。", "Being prepared avoids calamity."),
];
