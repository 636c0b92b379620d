#![allow(clippy::too_many_lines)]
//! Classification data.
//!
//! Every code the ion can classify is listed here explicitly. There is no
//! pattern matching on icon codes: a code missing from [`ICON_CODES`] is
//! unknown, full stop.

use weather_ion_weather_models::ConditionCategory::{
    self, ChanceShowersDay, ChanceShowersNight, ChanceSnowDay, ChanceSnowNight,
    ChanceThunderstormDay, ChanceThunderstormNight, ClearDay, ClearNight, FewCloudsDay,
    FewCloudsNight, Flurries, Haze, LightRain, LightSnow, Mist, Overcast, PartlyCloudyDay,
    PartlyCloudyNight, Rain, RainSnow, Showers, Snow, Thunderstorm,
};

/// Composite icon codes with their category and Russian description.
///
/// Codes are built from a sky prefix (`d.sun`, `n.moon`, `d.sun.c1`,
/// `n.moon.c1`, `d.sun.c2`, `n.moon.c2`, `c3`), an optional precipitation
/// step (`r1`-`r3` rain, `s1`-`s3` snow, `rs1`-`rs3` rain and snow) and an
/// optional `st` thunderstorm flag. The flag always wins over the
/// precipitation step.
pub const ICON_CODES: &[(&str, ConditionCategory, &str)] = &[
    // ── sky only ─────────────────────────────────────────
    ("d.sun", ClearDay, "Ясно"),
    ("n.moon", ClearNight, "Ясно"),
    ("d.sun.c1", FewCloudsDay, "Малооблачно"),
    ("n.moon.c1", FewCloudsNight, "Малооблачно"),
    ("d.sun.c2", PartlyCloudyDay, "Облачно"),
    ("n.moon.c2", PartlyCloudyNight, "Облачно"),
    ("c3", Overcast, "Пасмурно"),
    ("mist", Mist, "Туман"),
    // ── ясно (d.sun) ─────────────────────────────
    ("d.sun.r1", ChanceShowersDay, "Ясно, небольшой дождь"),
    ("d.sun.r1.st", ChanceThunderstormDay, "Ясно, небольшой дождь, гроза"),
    ("d.sun.r2", ChanceShowersDay, "Ясно, дождь"),
    ("d.sun.r2.st", ChanceThunderstormDay, "Ясно, дождь, гроза"),
    ("d.sun.r3", ChanceShowersDay, "Ясно, сильный дождь"),
    ("d.sun.r3.st", ChanceThunderstormDay, "Ясно, сильный дождь, гроза"),
    ("d.sun.s1", ChanceSnowDay, "Ясно, небольшой снег"),
    ("d.sun.s1.st", ChanceThunderstormDay, "Ясно, небольшой снег, гроза"),
    ("d.sun.s2", ChanceSnowDay, "Ясно, снег"),
    ("d.sun.s2.st", ChanceThunderstormDay, "Ясно, снег, гроза"),
    ("d.sun.s3", ChanceSnowDay, "Ясно, сильный снег"),
    ("d.sun.s3.st", ChanceThunderstormDay, "Ясно, сильный снег, гроза"),
    ("d.sun.rs1", RainSnow, "Ясно, небольшой дождь со снегом"),
    ("d.sun.rs1.st", ChanceThunderstormDay, "Ясно, небольшой дождь со снегом, гроза"),
    ("d.sun.rs2", RainSnow, "Ясно, дождь со снегом"),
    ("d.sun.rs2.st", ChanceThunderstormDay, "Ясно, дождь со снегом, гроза"),
    ("d.sun.rs3", RainSnow, "Ясно, сильный дождь со снегом"),
    ("d.sun.rs3.st", ChanceThunderstormDay, "Ясно, сильный дождь со снегом, гроза"),
    ("d.sun.st", ChanceThunderstormDay, "Ясно, гроза"),
    // ── ясно (n.moon) ─────────────────────────────
    ("n.moon.r1", ChanceShowersNight, "Ясно, небольшой дождь"),
    ("n.moon.r1.st", ChanceThunderstormNight, "Ясно, небольшой дождь, гроза"),
    ("n.moon.r2", ChanceShowersNight, "Ясно, дождь"),
    ("n.moon.r2.st", ChanceThunderstormNight, "Ясно, дождь, гроза"),
    ("n.moon.r3", ChanceShowersNight, "Ясно, сильный дождь"),
    ("n.moon.r3.st", ChanceThunderstormNight, "Ясно, сильный дождь, гроза"),
    ("n.moon.s1", ChanceSnowNight, "Ясно, небольшой снег"),
    ("n.moon.s1.st", ChanceThunderstormNight, "Ясно, небольшой снег, гроза"),
    ("n.moon.s2", ChanceSnowNight, "Ясно, снег"),
    ("n.moon.s2.st", ChanceThunderstormNight, "Ясно, снег, гроза"),
    ("n.moon.s3", ChanceSnowNight, "Ясно, сильный снег"),
    ("n.moon.s3.st", ChanceThunderstormNight, "Ясно, сильный снег, гроза"),
    ("n.moon.rs1", RainSnow, "Ясно, небольшой дождь со снегом"),
    ("n.moon.rs1.st", ChanceThunderstormNight, "Ясно, небольшой дождь со снегом, гроза"),
    ("n.moon.rs2", RainSnow, "Ясно, дождь со снегом"),
    ("n.moon.rs2.st", ChanceThunderstormNight, "Ясно, дождь со снегом, гроза"),
    ("n.moon.rs3", RainSnow, "Ясно, сильный дождь со снегом"),
    ("n.moon.rs3.st", ChanceThunderstormNight, "Ясно, сильный дождь со снегом, гроза"),
    ("n.moon.st", ChanceThunderstormNight, "Ясно, гроза"),
    // ── малооблачно (d.sun.c1) ─────────────────────────────
    ("d.sun.c1.r1", ChanceShowersDay, "Малооблачно, небольшой дождь"),
    ("d.sun.c1.r1.st", ChanceThunderstormDay, "Малооблачно, небольшой дождь, гроза"),
    ("d.sun.c1.r2", ChanceShowersDay, "Малооблачно, дождь"),
    ("d.sun.c1.r2.st", ChanceThunderstormDay, "Малооблачно, дождь, гроза"),
    ("d.sun.c1.r3", ChanceShowersDay, "Малооблачно, сильный дождь"),
    ("d.sun.c1.r3.st", ChanceThunderstormDay, "Малооблачно, сильный дождь, гроза"),
    ("d.sun.c1.s1", ChanceSnowDay, "Малооблачно, небольшой снег"),
    ("d.sun.c1.s1.st", ChanceThunderstormDay, "Малооблачно, небольшой снег, гроза"),
    ("d.sun.c1.s2", ChanceSnowDay, "Малооблачно, снег"),
    ("d.sun.c1.s2.st", ChanceThunderstormDay, "Малооблачно, снег, гроза"),
    ("d.sun.c1.s3", ChanceSnowDay, "Малооблачно, сильный снег"),
    ("d.sun.c1.s3.st", ChanceThunderstormDay, "Малооблачно, сильный снег, гроза"),
    ("d.sun.c1.rs1", RainSnow, "Малооблачно, небольшой дождь со снегом"),
    ("d.sun.c1.rs1.st", ChanceThunderstormDay, "Малооблачно, небольшой дождь со снегом, гроза"),
    ("d.sun.c1.rs2", RainSnow, "Малооблачно, дождь со снегом"),
    ("d.sun.c1.rs2.st", ChanceThunderstormDay, "Малооблачно, дождь со снегом, гроза"),
    ("d.sun.c1.rs3", RainSnow, "Малооблачно, сильный дождь со снегом"),
    ("d.sun.c1.rs3.st", ChanceThunderstormDay, "Малооблачно, сильный дождь со снегом, гроза"),
    ("d.sun.c1.st", ChanceThunderstormDay, "Малооблачно, гроза"),
    // ── малооблачно (n.moon.c1) ─────────────────────────────
    ("n.moon.c1.r1", ChanceShowersNight, "Малооблачно, небольшой дождь"),
    ("n.moon.c1.r1.st", ChanceThunderstormNight, "Малооблачно, небольшой дождь, гроза"),
    ("n.moon.c1.r2", ChanceShowersNight, "Малооблачно, дождь"),
    ("n.moon.c1.r2.st", ChanceThunderstormNight, "Малооблачно, дождь, гроза"),
    ("n.moon.c1.r3", ChanceShowersNight, "Малооблачно, сильный дождь"),
    ("n.moon.c1.r3.st", ChanceThunderstormNight, "Малооблачно, сильный дождь, гроза"),
    ("n.moon.c1.s1", ChanceSnowNight, "Малооблачно, небольшой снег"),
    ("n.moon.c1.s1.st", ChanceThunderstormNight, "Малооблачно, небольшой снег, гроза"),
    ("n.moon.c1.s2", ChanceSnowNight, "Малооблачно, снег"),
    ("n.moon.c1.s2.st", ChanceThunderstormNight, "Малооблачно, снег, гроза"),
    ("n.moon.c1.s3", ChanceSnowNight, "Малооблачно, сильный снег"),
    ("n.moon.c1.s3.st", ChanceThunderstormNight, "Малооблачно, сильный снег, гроза"),
    ("n.moon.c1.rs1", RainSnow, "Малооблачно, небольшой дождь со снегом"),
    ("n.moon.c1.rs1.st", ChanceThunderstormNight, "Малооблачно, небольшой дождь со снегом, гроза"),
    ("n.moon.c1.rs2", RainSnow, "Малооблачно, дождь со снегом"),
    ("n.moon.c1.rs2.st", ChanceThunderstormNight, "Малооблачно, дождь со снегом, гроза"),
    ("n.moon.c1.rs3", RainSnow, "Малооблачно, сильный дождь со снегом"),
    ("n.moon.c1.rs3.st", ChanceThunderstormNight, "Малооблачно, сильный дождь со снегом, гроза"),
    ("n.moon.c1.st", ChanceThunderstormNight, "Малооблачно, гроза"),
    // ── облачно (d.sun.c2) ─────────────────────────────
    ("d.sun.c2.r1", ChanceShowersDay, "Облачно, небольшой дождь"),
    ("d.sun.c2.r1.st", ChanceThunderstormDay, "Облачно, небольшой дождь, гроза"),
    ("d.sun.c2.r2", ChanceShowersDay, "Облачно, дождь"),
    ("d.sun.c2.r2.st", ChanceThunderstormDay, "Облачно, дождь, гроза"),
    ("d.sun.c2.r3", ChanceShowersDay, "Облачно, сильный дождь"),
    ("d.sun.c2.r3.st", ChanceThunderstormDay, "Облачно, сильный дождь, гроза"),
    ("d.sun.c2.s1", ChanceSnowDay, "Облачно, небольшой снег"),
    ("d.sun.c2.s1.st", ChanceThunderstormDay, "Облачно, небольшой снег, гроза"),
    ("d.sun.c2.s2", ChanceSnowDay, "Облачно, снег"),
    ("d.sun.c2.s2.st", ChanceThunderstormDay, "Облачно, снег, гроза"),
    ("d.sun.c2.s3", ChanceSnowDay, "Облачно, сильный снег"),
    ("d.sun.c2.s3.st", ChanceThunderstormDay, "Облачно, сильный снег, гроза"),
    ("d.sun.c2.rs1", RainSnow, "Облачно, небольшой дождь со снегом"),
    ("d.sun.c2.rs1.st", ChanceThunderstormDay, "Облачно, небольшой дождь со снегом, гроза"),
    ("d.sun.c2.rs2", RainSnow, "Облачно, дождь со снегом"),
    ("d.sun.c2.rs2.st", ChanceThunderstormDay, "Облачно, дождь со снегом, гроза"),
    ("d.sun.c2.rs3", RainSnow, "Облачно, сильный дождь со снегом"),
    ("d.sun.c2.rs3.st", ChanceThunderstormDay, "Облачно, сильный дождь со снегом, гроза"),
    ("d.sun.c2.st", ChanceThunderstormDay, "Облачно, гроза"),
    // ── облачно (n.moon.c2) ─────────────────────────────
    ("n.moon.c2.r1", ChanceShowersNight, "Облачно, небольшой дождь"),
    ("n.moon.c2.r1.st", ChanceThunderstormNight, "Облачно, небольшой дождь, гроза"),
    ("n.moon.c2.r2", ChanceShowersNight, "Облачно, дождь"),
    ("n.moon.c2.r2.st", ChanceThunderstormNight, "Облачно, дождь, гроза"),
    ("n.moon.c2.r3", ChanceShowersNight, "Облачно, сильный дождь"),
    ("n.moon.c2.r3.st", ChanceThunderstormNight, "Облачно, сильный дождь, гроза"),
    ("n.moon.c2.s1", ChanceSnowNight, "Облачно, небольшой снег"),
    ("n.moon.c2.s1.st", ChanceThunderstormNight, "Облачно, небольшой снег, гроза"),
    ("n.moon.c2.s2", ChanceSnowNight, "Облачно, снег"),
    ("n.moon.c2.s2.st", ChanceThunderstormNight, "Облачно, снег, гроза"),
    ("n.moon.c2.s3", ChanceSnowNight, "Облачно, сильный снег"),
    ("n.moon.c2.s3.st", ChanceThunderstormNight, "Облачно, сильный снег, гроза"),
    ("n.moon.c2.rs1", RainSnow, "Облачно, небольшой дождь со снегом"),
    ("n.moon.c2.rs1.st", ChanceThunderstormNight, "Облачно, небольшой дождь со снегом, гроза"),
    ("n.moon.c2.rs2", RainSnow, "Облачно, дождь со снегом"),
    ("n.moon.c2.rs2.st", ChanceThunderstormNight, "Облачно, дождь со снегом, гроза"),
    ("n.moon.c2.rs3", RainSnow, "Облачно, сильный дождь со снегом"),
    ("n.moon.c2.rs3.st", ChanceThunderstormNight, "Облачно, сильный дождь со снегом, гроза"),
    ("n.moon.c2.st", ChanceThunderstormNight, "Облачно, гроза"),
    // ── пасмурно (c3) ─────────────────────────────
    ("c3.r1", LightRain, "Пасмурно, небольшой дождь"),
    ("c3.r1.st", Thunderstorm, "Пасмурно, небольшой дождь, гроза"),
    ("c3.r2", Rain, "Пасмурно, дождь"),
    ("c3.r2.st", Thunderstorm, "Пасмурно, дождь, гроза"),
    ("c3.r3", Showers, "Пасмурно, сильный дождь"),
    ("c3.r3.st", Thunderstorm, "Пасмурно, сильный дождь, гроза"),
    ("c3.s1", Flurries, "Пасмурно, небольшой снег"),
    ("c3.s1.st", Thunderstorm, "Пасмурно, небольшой снег, гроза"),
    ("c3.s2", LightSnow, "Пасмурно, снег"),
    ("c3.s2.st", Thunderstorm, "Пасмурно, снег, гроза"),
    ("c3.s3", Snow, "Пасмурно, сильный снег"),
    ("c3.s3.st", Thunderstorm, "Пасмурно, сильный снег, гроза"),
    ("c3.rs1", RainSnow, "Пасмурно, небольшой дождь со снегом"),
    ("c3.rs1.st", Thunderstorm, "Пасмурно, небольшой дождь со снегом, гроза"),
    ("c3.rs2", RainSnow, "Пасмурно, дождь со снегом"),
    ("c3.rs2.st", Thunderstorm, "Пасмурно, дождь со снегом, гроза"),
    ("c3.rs3", RainSnow, "Пасмурно, сильный дождь со снегом"),
    ("c3.rs3.st", Thunderstorm, "Пасмурно, сильный дождь со снегом, гроза"),
    ("c3.st", Thunderstorm, "Пасмурно, гроза"),
];

/// Free-text condition phrases, keyed in lowercase.
pub const RAW_CONDITIONS: &[(&str, ConditionCategory)] = &[
    ("ясно", ClearDay),
    ("солнечно", ClearDay),
    ("малооблачно", FewCloudsDay),
    ("облачно", PartlyCloudyDay),
    ("облачно с прояснениями", PartlyCloudyDay),
    ("переменная облачность", PartlyCloudyDay),
    ("пасмурно", Overcast),
    ("небольшой дождь", LightRain),
    ("кратковременный дождь", LightRain),
    ("дождь", Rain),
    ("сильный дождь", Showers),
    ("ливень", Showers),
    ("небольшой снег", Flurries),
    ("снег", LightSnow),
    ("сильный снег", Snow),
    ("снегопад", Snow),
    ("мокрый снег", RainSnow),
    ("дождь со снегом", RainSnow),
    ("гроза", Thunderstorm),
    ("дождь, гроза", Thunderstorm),
    ("туман", Mist),
    ("дымка", Haze),
    ("мгла", Haze),
];

/// Wind direction tokens mapped to 8-point compass directions.
///
/// The empty token means the document gave no direction, which the source
/// uses for variable or calm wind.
pub const WIND_DIRECTIONS: &[(&str, &str)] = &[
    ("С", "N"),
    ("СВ", "NE"),
    ("В", "E"),
    ("ЮВ", "SE"),
    ("Ю", "S"),
    ("ЮЗ", "SW"),
    ("З", "W"),
    ("СЗ", "NW"),
    ("", "VR"),
    ("штиль", "VR"),
];

/// Weekday tokens, keyed in lowercase, mapped to long English names.
pub const DAY_NAMES: &[(&str, &str)] = &[
    ("пн", "Monday"),
    ("вт", "Tuesday"),
    ("ср", "Wednesday"),
    ("чт", "Thursday"),
    ("пт", "Friday"),
    ("сб", "Saturday"),
    ("вс", "Sunday"),
    ("понедельник", "Monday"),
    ("вторник", "Tuesday"),
    ("среда", "Wednesday"),
    ("четверг", "Thursday"),
    ("пятница", "Friday"),
    ("суббота", "Saturday"),
    ("воскресенье", "Sunday"),
];
