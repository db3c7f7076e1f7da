//! Configuration axis domains.
//!
//! Each axis is one independent build-time choice with a finite domain of
//! mutually exclusive legal values, expressed as a tagged enum instead of
//! symbolic preprocessor arithmetic. Every enum exposes its ordered domain as
//! `ALL` so the validator can run the count-of-matches check over it.
//!
//! Axes whose selection may be absent (no documented default, or only
//! conditionally required) appear as `Option`s in
//! [`BuildConfig`](crate::config::BuildConfig); the sentinel "disabled"
//! choices (wind label, wind arrow) are ordinary domain members instead.

// =============================================================================
// Hardware Axes
// =============================================================================

/// E-paper panel type.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum EpdPanel {
    /// 7.5in e-Paper (v2), 800x480px, black/white.
    BwV2,
    /// 7.5in e-Paper (B), 800x480px, red/black/white.
    ThreeColorB,
    /// 7.3in ACeP e-Paper (F), 800x480px, 7-color.
    SevenColorF,
    /// 7.5in e-Paper (v1), 640x384px, black/white.
    BwV1,
}

impl EpdPanel {
    /// All legal panel selections.
    pub const ALL: [Self; 4] = [Self::BwV2, Self::ThreeColorB, Self::SevenColorF, Self::BwV1];

    /// True for panels with a third (or more) display color.
    ///
    /// Multi-color panels require an accent color selection.
    #[inline]
    pub const fn is_multi_color(self) -> bool { matches!(self, Self::ThreeColorB | Self::SevenColorF) }
}

/// E-paper driver board.
///
/// The DESPI-C02 is the only officially supported board; Waveshare rev2.2/2.3
/// support is kept for existing builds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum EpdDriver {
    DespiC02,
    Waveshare,
}

impl EpdDriver {
    /// All legal driver board selections.
    pub const ALL: [Self; 2] = [Self::DespiC02, Self::Waveshare];
}

/// Indoor environment sensor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Sensor {
    Bme280,
    Bme680,
}

impl Sensor {
    /// All legal sensor selections.
    pub const ALL: [Self; 2] = [Self::Bme280, Self::Bme680];
}

/// Third display color used when a multi-color panel is selected.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum AccentColor {
    Red,
    Yellow,
    Orange,
    Green,
    Blue,
}

impl AccentColor {
    /// All legal accent color selections.
    pub const ALL: [Self; 5] = [Self::Red, Self::Yellow, Self::Orange, Self::Green, Self::Blue];
}

// =============================================================================
// Locale and Weather Source
// =============================================================================

/// Display locale (date formats, translated labels).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Locale {
    DeDe,
    EnGb,
    EnUs,
    EtEe,
    FiFi,
    FrFr,
    ItIt,
    NlBe,
    PtBr,
    EsEs,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Self; 10] = [
        Self::DeDe,
        Self::EnGb,
        Self::EnUs,
        Self::EtEe,
        Self::FiFi,
        Self::FrFr,
        Self::ItIt,
        Self::NlBe,
        Self::PtBr,
        Self::EsEs,
    ];
}

/// Weather data provider.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum WeatherApi {
    /// OpenWeatherMap One Call. Requires an API key.
    OpenWeatherMap,
    /// Open-Meteo. No key required.
    OpenMeteo,
}

impl WeatherApi {
    /// All legal provider selections.
    pub const ALL: [Self; 2] = [Self::OpenWeatherMap, Self::OpenMeteo];

    /// True if this provider needs an API key configured.
    #[inline]
    pub const fn requires_api_key(self) -> bool { matches!(self, Self::OpenWeatherMap) }
}

// =============================================================================
// Unit Axes
// =============================================================================

/// Temperature unit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// All legal temperature units.
    pub const ALL: [Self; 3] = [Self::Kelvin, Self::Celsius, Self::Fahrenheit];
}

/// Wind speed unit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum WindSpeedUnit {
    MetersPerSecond,
    FeetPerSecond,
    KilometersPerHour,
    MilesPerHour,
    Knots,
    Beaufort,
}

impl WindSpeedUnit {
    /// All legal wind speed units.
    pub const ALL: [Self; 6] = [
        Self::MetersPerSecond,
        Self::FeetPerSecond,
        Self::KilometersPerHour,
        Self::MilesPerHour,
        Self::Knots,
        Self::Beaufort,
    ];
}

/// Atmospheric pressure unit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum PressureUnit {
    Hectopascals,
    Pascals,
    MillimetersOfMercury,
    InchesOfMercury,
    Millibars,
    Atmospheres,
    GramsPerSquareCentimeter,
    PoundsPerSquareInch,
}

impl PressureUnit {
    /// All legal pressure units.
    pub const ALL: [Self; 8] = [
        Self::Hectopascals,
        Self::Pascals,
        Self::MillimetersOfMercury,
        Self::InchesOfMercury,
        Self::Millibars,
        Self::Atmospheres,
        Self::GramsPerSquareCentimeter,
        Self::PoundsPerSquareInch,
    ];
}

/// Visibility distance unit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum DistanceUnit {
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// All legal distance units.
    pub const ALL: [Self; 2] = [Self::Kilometers, Self::Miles];
}

/// Precipitation measure, shared by the hourly and daily axes.
///
/// `Pop` is probability of precipitation; the rest are volume units.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum PrecipUnit {
    Pop,
    Millimeters,
    Centimeters,
    Inches,
}

impl PrecipUnit {
    /// All legal precipitation measures.
    pub const ALL: [Self; 4] = [Self::Pop, Self::Millimeters, Self::Centimeters, Self::Inches];
}

// =============================================================================
// Transport and Presentation Axes
// =============================================================================

/// HTTP security mode for weather API requests.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum HttpMode {
    /// Plain HTTP. No encryption, lowest power draw.
    Http,
    /// HTTPS without X.509 certificate verification.
    HttpsNoCertVerif,
    /// HTTPS with X.509 certificate verification. Certificates baked into the
    /// image expire and require a reflash to renew.
    HttpsWithCertVerif,
}

impl HttpMode {
    /// All legal HTTP modes.
    pub const ALL: [Self; 3] = [Self::Http, Self::HttpsNoCertVerif, Self::HttpsWithCertVerif];
}

/// Wind direction label style next to the wind speed readout.
///
/// Compass point notation narrows from cardinal (±45.000°) down to tertiary
/// intercardinal (±5.625°).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum WindDirectionLabel {
    /// No label shown.
    Hidden,
    /// Numeric degrees.
    Number,
    Cardinal,
    Intercardinal,
    SecondaryIntercardinal,
    TertiaryIntercardinal,
}

impl WindDirectionLabel {
    /// All legal label styles, the disabled sentinel included.
    pub const ALL: [Self; 6] = [
        Self::Hidden,
        Self::Number,
        Self::Cardinal,
        Self::Intercardinal,
        Self::SecondaryIntercardinal,
        Self::TertiaryIntercardinal,
    ];
}

/// Wind direction arrow precision.
///
/// Finer precision stores more arrow icons in flash: 4 points cost 288 B,
/// 360 points cost ~25 kB.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum WindArrowPrecision {
    /// No arrow shown.
    Hidden,
    Cardinal,
    Intercardinal,
    SecondaryIntercardinal,
    TertiaryIntercardinal,
    /// One icon per degree (±0.5°).
    Deg360,
}

impl WindArrowPrecision {
    /// All legal precision levels, the disabled sentinel included.
    pub const ALL: [Self; 6] = [
        Self::Hidden,
        Self::Cardinal,
        Self::Intercardinal,
        Self::SecondaryIntercardinal,
        Self::TertiaryIntercardinal,
        Self::Deg360,
    ];
}

/// Display typeface.
///
/// The layout was designed around GNU FreeSans; other faces may produce
/// undesired spacing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Font {
    FreeMono,
    FreeSans,
    FreeSerif,
    Lato,
    Montserrat,
    OpenSans,
    Poppins,
    Quicksand,
    Raleway,
    Roboto,
    RobotoMono,
    RobotoSlab,
    Ubuntu,
    UbuntuMono,
}

impl Font {
    /// All bundled typefaces.
    pub const ALL: [Self; 14] = [
        Self::FreeMono,
        Self::FreeSans,
        Self::FreeSerif,
        Self::Lato,
        Self::Montserrat,
        Self::OpenSans,
        Self::Poppins,
        Self::Quicksand,
        Self::Raleway,
        Self::Roboto,
        Self::RobotoMono,
        Self::RobotoSlab,
        Self::Ubuntu,
        Self::UbuntuMono,
    ];
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_color_panels() {
        assert!(EpdPanel::ThreeColorB.is_multi_color());
        assert!(EpdPanel::SevenColorF.is_multi_color());
        assert!(!EpdPanel::BwV1.is_multi_color());
        assert!(!EpdPanel::BwV2.is_multi_color());
    }

    #[test]
    fn test_api_key_requirement() {
        assert!(WeatherApi::OpenWeatherMap.requires_api_key());
        assert!(!WeatherApi::OpenMeteo.requires_api_key());
    }

    #[test]
    fn test_domains_are_disjoint() {
        // Domains list every variant exactly once
        for (i, a) in EpdPanel::ALL.iter().enumerate() {
            for (j, b) in EpdPanel::ALL.iter().enumerate() {
                assert_eq!(a == b, i == j);
            }
        }
        for (i, a) in PressureUnit::ALL.iter().enumerate() {
            for (j, b) in PressureUnit::ALL.iter().enumerate() {
                assert_eq!(a == b, i == j);
            }
        }
    }

    #[test]
    fn test_disabled_sentinels_are_domain_members() {
        assert!(WindDirectionLabel::ALL.contains(&WindDirectionLabel::Hidden));
        assert!(WindArrowPrecision::ALL.contains(&WindArrowPrecision::Hidden));
    }
}
