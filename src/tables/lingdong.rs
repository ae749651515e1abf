use serde::Serialize;

/// Fortune class of a lingdong number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FortuneClass {
    GreatLuck,
    Luck,
    LuckWithIll,
    IllWithLuck,
    IllLuck,
}

impl FortuneClass {
    pub fn label(&self) -> &'static str {
        match self {
            FortuneClass::GreatLuck => "大吉",
            FortuneClass::Luck => "吉",
            FortuneClass::LuckWithIll => "吉帶凶",
            FortuneClass::IllWithLuck => "凶帶吉",
            FortuneClass::IllLuck => "凶",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LingdongEntry {
    pub index: u32,
    pub fortune_class: FortuneClass,
    pub meaning: &'static str,
    pub score: i32,
}

const fn entry(
    index: u32,
    fortune_class: FortuneClass,
    meaning: &'static str,
    score: i32,
) -> LingdongEntry {
    LingdongEntry {
        index,
        fortune_class,
        meaning,
        score,
    }
}

/// The 81 lingdong numbers; `LINGDONG_TABLE[n - 1]` is number `n`.
pub const LINGDONG_TABLE: [LingdongEntry; 81] = [
    entry(1, FortuneClass::GreatLuck, "宇宙起源,天地開泰", 10),
    entry(2, FortuneClass::IllLuck, "混飩未定,分離破敗", -5),
    entry(3, FortuneClass::GreatLuck, "進取如意,增進繁榮", 10),
    entry(4, FortuneClass::IllLuck, "破敗凶變,萬事休止", -8),
    entry(5, FortuneClass::GreatLuck, "福祿長壽,福德集門", 10),
    entry(6, FortuneClass::Luck, "安穩餘慶,吉人天相", 8),
    entry(7, FortuneClass::Luck, "剛毅果斷,勇往直前", 8),
    entry(8, FortuneClass::Luck, "意志剛健,勤勉發展", 8),
    entry(9, FortuneClass::IllLuck, "興盡凶始,窮乏困苦", -8),
    entry(10, FortuneClass::IllLuck, "萬事終局,充滿損耗", -8),
    entry(11, FortuneClass::GreatLuck, "穩健吉慶,富貴榮達", 10),
    entry(12, FortuneClass::IllLuck, "意志薄弱,家庭寂寞", -5),
    entry(13, FortuneClass::GreatLuck, "智略超群,博學多才", 10),
    entry(14, FortuneClass::IllLuck, "淪落天涯,失意煩悶", -5),
    entry(15, FortuneClass::GreatLuck, "福壽雙全,立身興家", 10),
    entry(16, FortuneClass::GreatLuck, "貴人相助,興家興業", 10),
    entry(17, FortuneClass::Luck, "突破萬難,剛柔兼備", 8),
    entry(18, FortuneClass::Luck, "有志竟成,內名有運", 8),
    entry(19, FortuneClass::IllLuck, "風雲蔽月,災苦重來", -7),
    entry(20, FortuneClass::IllLuck, "非業破運,災禍不安", -7),
    entry(21, FortuneClass::GreatLuck, "獨立權威,明月光照", 10),
    entry(22, FortuneClass::IllLuck, "秋草逢霜,兩士相爭", -5),
    entry(23, FortuneClass::GreatLuck, "旭日東升,質實剛堅", 10),
    entry(24, FortuneClass::GreatLuck, "家門餘慶,金錢豐盈", 10),
    entry(25, FortuneClass::Luck, "英俊剛毅,資性聰敏", 8),
    entry(26, FortuneClass::IllLuck, "波瀾重疊,變怪奇異", -4),
    entry(27, FortuneClass::LuckWithIll, "足智多謀,先苦後甜", 3),
    entry(28, FortuneClass::IllLuck, "家親緣薄,離群獨處", -6),
    entry(29, FortuneClass::Luck, "智謀兼備,欲望難足", 7),
    entry(30, FortuneClass::LuckWithIll, "一成一敗,絕處逢生", 3),
    entry(31, FortuneClass::GreatLuck, "智勇得志,心想事成", 10),
    entry(32, FortuneClass::GreatLuck, "權貴顯達,意外惠澤", 10),
    entry(33, FortuneClass::GreatLuck, "家門隆昌,才德開展", 10),
    entry(34, FortuneClass::IllLuck, "破家亡身,財命危險", -8),
    entry(35, FortuneClass::Luck, "溫和平靜,智達通暢", 8),
    entry(36, FortuneClass::IllLuck, "風浪不息,俠義薄運", -5),
    entry(37, FortuneClass::Luck, "權威顯達,吉人天相", 8),
    entry(38, FortuneClass::Luck, "磨鐵成針,刻意經營", 7),
    entry(39, FortuneClass::GreatLuck, "富貴榮華,變化無窮", 10),
    entry(40, FortuneClass::LuckWithIll, "謹慎保安,豪膽邁進", 3),
    entry(41, FortuneClass::GreatLuck, "德高望重,事事如意", 10),
    entry(42, FortuneClass::LuckWithIll, "寒嬋在柳,十藝不成", 2),
    entry(43, FortuneClass::IllWithLuck, "邪途散財,外祥內苦", -2),
    entry(44, FortuneClass::IllLuck, "須眉難展,力量有限", -6),
    entry(45, FortuneClass::GreatLuck, "順風揚帆,萬事如意", 10),
    entry(46, FortuneClass::IllLuck, "羅網繫身,離祖成家", -5),
    entry(47, FortuneClass::GreatLuck, "點鐵成金,開花結果", 10),
    entry(48, FortuneClass::Luck, "智謀兼備,德量榮達", 8),
    entry(49, FortuneClass::LuckWithIll, "吉凶難分,不斷辛勞", 2),
    entry(50, FortuneClass::LuckWithIll, "小舟入海,吉凶參半", 2),
    entry(51, FortuneClass::LuckWithIll, "一盛一衰,浮沉不定", 2),
    entry(52, FortuneClass::Luck, "草木逢春,雨過天晴", 7),
    entry(53, FortuneClass::LuckWithIll, "外祥內患,先吉後凶", 1),
    entry(54, FortuneClass::IllLuck, "雖傾全力,難望成功", -6),
    entry(55, FortuneClass::LuckWithIll, "外美內苦,假面繁榮", 1),
    entry(56, FortuneClass::IllLuck, "缺乏實行,難望成功", -5),
    entry(57, FortuneClass::Luck, "寒雪青松,晚年昌隆", 7),
    entry(58, FortuneClass::LuckWithIll, "先苦後甘,浮沉多端", 2),
    entry(59, FortuneClass::IllLuck, "遇事猶疑,難望成功", -6),
    entry(60, FortuneClass::IllLuck, "黑暗無光,心迷意亂", -7),
    entry(61, FortuneClass::Luck, "名利雙收,繁榮富貴", 8),
    entry(62, FortuneClass::IllLuck, "基礎虛弱,搖搖欲墜", -6),
    entry(63, FortuneClass::Luck, "萬物化育,繁榮之象", 8),
    entry(64, FortuneClass::IllLuck, "骨肉分離,孤兒悲愁", -7),
    entry(65, FortuneClass::GreatLuck, "吉運自來,能享盛名", 10),
    entry(66, FortuneClass::IllLuck, "內外不和,信用缺乏", -5),
    entry(67, FortuneClass::GreatLuck, "富貴長壽,光明正大", 10),
    entry(68, FortuneClass::Luck, "思慮周詳,計劃力行", 8),
    entry(69, FortuneClass::IllLuck, "動搖不安,常陷逆境", -6),
    entry(70, FortuneClass::IllLuck, "慘淡經營,難免貧困", -7),
    entry(71, FortuneClass::LuckWithIll, "吉凶參半,惟賴勇氣", 2),
    entry(72, FortuneClass::LuckWithIll, "先甘後苦,不能持久", 1),
    entry(73, FortuneClass::LuckWithIll, "盛衰交加,可守成功", 2),
    entry(74, FortuneClass::IllLuck, "智能不足,坐食山空", -6),
    entry(75, FortuneClass::LuckWithIll, "先吉後凶,退守可安", 1),
    entry(76, FortuneClass::IllWithLuck, "傾覆離散,骨肉分離", -3),
    entry(77, FortuneClass::LuckWithIll, "先苦後甘,不可倉促", 2),
    entry(78, FortuneClass::LuckWithIll, "有得有失,華而不實", 1),
    entry(79, FortuneClass::IllLuck, "挽回乏力,身疲力盡", -7),
    entry(80, FortuneClass::IllLuck, "凶星入度,清本縮小", -7),
    entry(81, FortuneClass::GreatLuck, "萬物回春,還原復始", 10),
];

/// Great-luck indices used as recommendation targets, in ascending order.
/// 39 is great luck in the table but is not a target.
pub const GREAT_LUCK_INDICES: [u32; 19] = [
    1, 3, 5, 11, 13, 15, 16, 21, 23, 24, 31, 32, 33, 41, 45, 47, 65, 67, 81,
];

pub fn lookup(index: u32) -> Option<&'static LingdongEntry> {
    index
        .checked_sub(1)
        .and_then(|i| LINGDONG_TABLE.get(i as usize))
}
