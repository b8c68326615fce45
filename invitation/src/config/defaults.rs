//! The stock default presentation config.

use super::{
    AudioAsset, BodyFont, ButtonStyle, CONFIG_VERSION, Content, FontScale, HeadingFont, Labels,
    Media, OpeningAsset, PresentationConfig, PublishState, RsvpText, SectionKey, SpacingDensity,
    Style, Texture, ThankYouText,
};
use chrono::{DateTime, Utc};

/// Couple names shipped with the default record.
pub const DEFAULT_COUPLE_NAMES: &str = "שירה ודניאל";

impl Default for PresentationConfig {
    /// The fixed default record.
    ///
    /// Timestamps are pinned to the Unix epoch so that two defaults always compare equal.
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            content: Content::default(),
            media: Media::default(),
            style: Style::default(),
            publish_state: PublishState {
                draft_updated_at: DateTime::<Utc>::UNIX_EPOCH,
                published_updated_at: DateTime::<Utc>::UNIX_EPOCH,
            },
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self {
            couple_names: DEFAULT_COUPLE_NAMES.to_string(),
            monogram_initials: "S & D".to_string(),
            intro_headline: "You're Invited".to_string(),
            welcome_text: "נשמח מאוד לראותכם חוגגים איתנו את היום המאושר בחיינו.".to_string(),
            labels: Labels::default(),
            rsvp: RsvpText::default(),
            thank_you: ThankYouText::default(),
            footer_text: "באהבה • שירה ודניאל".to_string(),
            section_order: vec![
                SectionKey::Hero,
                SectionKey::Welcome,
                SectionKey::EventDetails,
                SectionKey::Rsvp,
                SectionKey::Footer,
            ],
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            date: "התאריך".to_string(),
            time: "בשעה".to_string(),
            venue: "המקום".to_string(),
            address: "כתובת".to_string(),
            dress_code: "קוד לבוש".to_string(),
            notes: "הערות".to_string(),
            scroll_hint: "גלול למטה".to_string(),
            music_play_hint: "המוזיקה תתנגן".to_string(),
            tap_to_unmute: "לחץ לביטול השתקה".to_string(),
            skip_button: "דלג / כניסה לאתר".to_string(),
        }
    }
}

impl Default for RsvpText {
    fn default() -> Self {
        Self {
            open_button: "אישור הגעה".to_string(),
            step_next: "המשך".to_string(),
            step_back: "חזור".to_string(),
            submit: "שלח אישור".to_string(),
            edit_response: "ערוך תשובה".to_string(),
            question_attending: "האם תגיעו לחגוג איתנו?".to_string(),
            yes_option: "כן, מגיעים!".to_string(),
            no_option: "לצערי לא".to_string(),
            question_guests: "כמה אורחים תהיו?".to_string(),
            guests_subtitle: "כולל אותך".to_string(),
            question_final: "פרטים אחרונים".to_string(),
            dietary_placeholder: "רגישויות או בקשות מיוחדות למנות (אופציונלי)".to_string(),
            notes_placeholder: String::new(),
            not_attending_title: "נצטער שלא תגיעו".to_string(),
            not_attending_body: "נשמח אם תאשרו סופית כדי שנדע להיערך.".to_string(),
            not_attending_submit: "שלח אישורי (לא מגיע/ה)".to_string(),
            children_checkbox_label: "האם זה כולל ילדים?".to_string(),
            children_count_label: "כמה ילדים?".to_string(),
        }
    }
}

impl Default for ThankYouText {
    fn default() -> Self {
        Self {
            title: "תודה רבה!".to_string(),
            body: "שמחנו לקבל את אישורכם. נתראה בחתונה!".to_string(),
            deadline_passed: "ההרשמה לאירוע הסתיימה.".to_string(),
        }
    }
}

impl Default for Media {
    fn default() -> Self {
        Self {
            opening: OpeningAsset::Video {
                url: "/premium/intro/weddinenv.mp4".to_string(),
            },
            audio: AudioAsset::enabled(
                "/audio/All_You_Need_Is_Love-104256-mobiles24.mp3",
                0.0,
                0.6,
                2500,
            ),
            hero_gif_url: Some(String::new()),
            hero_gif_scale: Some(1.1),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            heading_font: HeadingFont::PlayfairDisplay,
            body_font: BodyFont::Inter,
            primary_color: "#1A1A1A".to_string(),
            secondary_color: "#B08D57".to_string(),
            texture: Texture::Paper,
            card_radius_px: 18,
            spacing: SpacingDensity::Comfortable,
            button_style: ButtonStyle::Filled,
            font_size: FontScale::default(),
        }
    }
}
