//! Mobile-friendly data types.
//!
//! These types are wrappers around dua-core types that are compatible
//! with UniFFI for cross-language bindings.

use dua_core::content::Authenticity;
use dua_core::tasbih::TasbihSession;
use dua_core::{
    AllahName, Dua, DuaCategory, DuaReference, FontSize, Language, PreferencesPatch, SourceKind,
    TasbihCounter, TasbihPreset, TasbihProgress, Theme, UserPreferences,
};

/// Kind of source a citation points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileSourceKind {
    Quran,
    Hadith,
    Other,
}

impl From<SourceKind> for MobileSourceKind {
    fn from(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Quran => MobileSourceKind::Quran,
            SourceKind::Hadith => MobileSourceKind::Hadith,
            SourceKind::Other => MobileSourceKind::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileAuthenticity {
    Sahih,
    Hasan,
    Daif,
}

impl From<Authenticity> for MobileAuthenticity {
    fn from(a: Authenticity) -> Self {
        match a {
            Authenticity::Sahih => MobileAuthenticity::Sahih,
            Authenticity::Hasan => MobileAuthenticity::Hasan,
            Authenticity::Daif => MobileAuthenticity::Daif,
        }
    }
}

/// Mobile-friendly citation.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileDuaReference {
    pub source: MobileSourceKind,
    pub book: Option<String>,
    pub chapter: Option<String>,
    pub verse: Option<String>,
    pub hadith_number: Option<String>,
    pub authenticity: Option<MobileAuthenticity>,
}

impl From<DuaReference> for MobileDuaReference {
    fn from(r: DuaReference) -> Self {
        MobileDuaReference {
            source: r.source.into(),
            book: r.book,
            chapter: r.chapter,
            verse: r.verse,
            hadith_number: r.hadith_number,
            authenticity: r.authenticity.map(Into::into),
        }
    }
}

/// Mobile-friendly dua.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileDua {
    pub id: String,
    pub title: String,
    pub title_arabic: Option<String>,
    pub title_urdu: Option<String>,
    pub category: String,
    pub category_id: String,
    pub arabic_text: String,
    pub transliteration: String,
    pub translation: String,
    pub translation_urdu: Option<String>,
    pub reference: MobileDuaReference,
    pub tags: Vec<String>,
    pub search_keywords: Vec<String>,
    pub benefits: Option<String>,
    pub benefits_urdu: Option<String>,
    pub additional_note: Option<String>,
    pub additional_note_urdu: Option<String>,
    pub situation: Option<String>,
    pub occasion: Option<String>,
}

impl From<Dua> for MobileDua {
    fn from(d: Dua) -> Self {
        MobileDua {
            id: d.id,
            title: d.title,
            title_arabic: d.title_arabic,
            title_urdu: d.title_urdu,
            category: d.category,
            category_id: d.category_id,
            arabic_text: d.arabic_text,
            transliteration: d.transliteration,
            translation: d.translation,
            translation_urdu: d.translation_urdu,
            reference: d.reference.into(),
            tags: d.tags,
            search_keywords: d.search_keywords,
            benefits: d.benefits,
            benefits_urdu: d.benefits_urdu,
            additional_note: d.additional_note,
            additional_note_urdu: d.additional_note_urdu,
            situation: d.situation,
            occasion: d.occasion,
        }
    }
}

/// Dua text resolved for one display language.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileLocalizedDua {
    pub id: String,
    pub title: String,
    pub translation: String,
    pub benefits: Option<String>,
    pub is_rtl: bool,
}

impl MobileLocalizedDua {
    pub fn new(dua: &Dua, language: Language) -> Self {
        MobileLocalizedDua {
            id: dua.id.clone(),
            title: dua.localized_title(language).to_string(),
            translation: dua.localized_translation(language).to_string(),
            benefits: dua.localized_benefits(language).map(str::to_string),
            is_rtl: language.is_rtl(),
        }
    }
}

/// Mobile-friendly category.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileCategory {
    pub id: String,
    pub name: String,
    pub name_arabic: Option<String>,
    pub name_urdu: Option<String>,
    pub description: String,
    pub description_urdu: Option<String>,
    pub icon: String,
    pub color: String,
    pub dua_count: u32,
    pub order: i32,
}

impl From<DuaCategory> for MobileCategory {
    fn from(c: DuaCategory) -> Self {
        MobileCategory {
            id: c.id,
            name: c.name,
            name_arabic: c.name_arabic,
            name_urdu: c.name_urdu,
            description: c.description,
            description_urdu: c.description_urdu,
            icon: c.icon,
            color: c.color,
            dua_count: u32::try_from(c.dua_count).unwrap_or(u32::MAX),
            order: c.order,
        }
    }
}

// === Preferences ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileLanguage {
    English,
    Urdu,
    Arabic,
}

impl From<Language> for MobileLanguage {
    fn from(l: Language) -> Self {
        match l {
            Language::English => MobileLanguage::English,
            Language::Urdu => MobileLanguage::Urdu,
            Language::Arabic => MobileLanguage::Arabic,
        }
    }
}

impl From<MobileLanguage> for Language {
    fn from(l: MobileLanguage) -> Self {
        match l {
            MobileLanguage::English => Language::English,
            MobileLanguage::Urdu => Language::Urdu,
            MobileLanguage::Arabic => Language::Arabic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileFontSize {
    Small,
    Medium,
    Large,
}

impl From<FontSize> for MobileFontSize {
    fn from(f: FontSize) -> Self {
        match f {
            FontSize::Small => MobileFontSize::Small,
            FontSize::Medium => MobileFontSize::Medium,
            FontSize::Large => MobileFontSize::Large,
        }
    }
}

impl From<MobileFontSize> for FontSize {
    fn from(f: MobileFontSize) -> Self {
        match f {
            MobileFontSize::Small => FontSize::Small,
            MobileFontSize::Medium => FontSize::Medium,
            MobileFontSize::Large => FontSize::Large,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileTheme {
    Light,
    Dark,
    System,
}

impl From<Theme> for MobileTheme {
    fn from(t: Theme) -> Self {
        match t {
            Theme::Light => MobileTheme::Light,
            Theme::Dark => MobileTheme::Dark,
            Theme::System => MobileTheme::System,
        }
    }
}

impl From<MobileTheme> for Theme {
    fn from(t: MobileTheme) -> Self {
        match t {
            MobileTheme::Light => Theme::Light,
            MobileTheme::Dark => Theme::Dark,
            MobileTheme::System => Theme::System,
        }
    }
}

/// Mobile-friendly preferences.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobilePreferences {
    pub font_size: MobileFontSize,
    pub show_transliteration: bool,
    pub show_translation: bool,
    pub audio_auto_play: bool,
    pub theme: MobileTheme,
    pub language: MobileLanguage,
    pub notifications_enabled: bool,
}

impl From<UserPreferences> for MobilePreferences {
    fn from(p: UserPreferences) -> Self {
        MobilePreferences {
            font_size: p.font_size.into(),
            show_transliteration: p.show_transliteration,
            show_translation: p.show_translation,
            audio_auto_play: p.audio_auto_play,
            theme: p.theme.into(),
            language: p.language.into(),
            notifications_enabled: p.notifications_enabled,
        }
    }
}

impl From<MobilePreferences> for UserPreferences {
    fn from(p: MobilePreferences) -> Self {
        UserPreferences {
            font_size: p.font_size.into(),
            show_transliteration: p.show_transliteration,
            show_translation: p.show_translation,
            audio_auto_play: p.audio_auto_play,
            theme: p.theme.into(),
            language: p.language.into(),
            notifications_enabled: p.notifications_enabled,
        }
    }
}

/// Partial preferences update; unset fields are left alone.
#[derive(Debug, Clone, Default, uniffi::Record)]
pub struct MobilePreferencesPatch {
    pub font_size: Option<MobileFontSize>,
    pub show_transliteration: Option<bool>,
    pub show_translation: Option<bool>,
    pub audio_auto_play: Option<bool>,
    pub theme: Option<MobileTheme>,
    pub language: Option<MobileLanguage>,
    pub notifications_enabled: Option<bool>,
}

impl From<MobilePreferencesPatch> for PreferencesPatch {
    fn from(p: MobilePreferencesPatch) -> Self {
        PreferencesPatch {
            font_size: p.font_size.map(Into::into),
            show_transliteration: p.show_transliteration,
            show_translation: p.show_translation,
            audio_auto_play: p.audio_auto_play,
            theme: p.theme.map(Into::into),
            language: p.language.map(Into::into),
            notifications_enabled: p.notifications_enabled,
        }
    }
}

// === Tasbih ===

#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileTasbihPreset {
    pub id: String,
    pub name: String,
    pub name_urdu: String,
    pub count: u32,
}

impl From<&TasbihPreset> for MobileTasbihPreset {
    fn from(p: &TasbihPreset) -> Self {
        MobileTasbihPreset {
            id: p.id.to_string(),
            name: p.name.to_string(),
            name_urdu: p.name_urdu.to_string(),
            count: p.count,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileTasbihSession {
    /// Seconds since the UNIX epoch.
    pub completed_at: u64,
    pub count: u32,
    pub target: u32,
}

impl From<TasbihSession> for MobileTasbihSession {
    fn from(s: TasbihSession) -> Self {
        MobileTasbihSession {
            completed_at: s.completed_at,
            count: s.count,
            target: s.target,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileTasbih {
    pub count: u32,
    pub target: u32,
    pub preset_id: String,
    /// Newest first.
    pub history: Vec<MobileTasbihSession>,
}

impl From<TasbihCounter> for MobileTasbih {
    fn from(c: TasbihCounter) -> Self {
        MobileTasbih {
            count: c.count,
            target: c.target,
            preset_id: c.preset_id,
            history: c.history.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, uniffi::Record)]
pub struct MobileTasbihProgress {
    pub count: u32,
    pub target_reached: bool,
}

impl From<TasbihProgress> for MobileTasbihProgress {
    fn from(p: TasbihProgress) -> Self {
        MobileTasbihProgress {
            count: p.count,
            target_reached: p.target_reached,
        }
    }
}

// === Names of Allah ===

#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileAllahName {
    pub number: u32,
    pub arabic: String,
    pub transliteration: String,
    pub translation: String,
    pub translation_urdu: Option<String>,
    pub meaning: Option<String>,
    pub meaning_urdu: Option<String>,
}

impl From<AllahName> for MobileAllahName {
    fn from(n: AllahName) -> Self {
        MobileAllahName {
            number: n.number,
            arabic: n.arabic,
            transliteration: n.transliteration,
            translation: n.translation,
            translation_urdu: n.translation_urdu,
            meaning: n.meaning,
            meaning_urdu: n.meaning_urdu,
        }
    }
}
