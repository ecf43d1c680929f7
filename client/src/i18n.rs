//! English/Arabic language model and UI copy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every translatable string on the site is a [`Bilingual`] pair. Components
//! render the half that matches the active [`Language`], so switching
//! language is a pure projection over this table and switching back restores
//! the original text verbatim.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use time::{Date, Month, Weekday};

/// Active display language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// Code stored in preferences and written to `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Text direction written to `<html dir>`.
    pub fn dir(self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Ar => "rtl",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }
}

/// A pair of English and Arabic strings switched as a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bilingual {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, ar: &'static str) -> Self {
        Self { en, ar }
    }

    pub fn pick(self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Ar => self.ar,
        }
    }
}

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September", "October",
    "November", "December",
];
const MONTHS_AR: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر",
    "ديسمبر",
];
const WEEKDAYS_SHORT_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const WEEKDAYS_SHORT_AR: [&str; 7] = ["ح", "ن", "ث", "ر", "خ", "ج", "س"];
const WEEKDAYS_LONG_EN: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
const WEEKDAYS_LONG_AR: [&str; 7] = ["الأحد", "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت"];

pub fn month_name(month: Month, lang: Language) -> &'static str {
    let idx = usize::from(u8::from(month)) - 1;
    match lang {
        Language::En => MONTHS_EN[idx],
        Language::Ar => MONTHS_AR[idx],
    }
}

/// Weekday abbreviations for the calendar header, Sunday first.
pub fn weekday_headers(lang: Language) -> [&'static str; 7] {
    match lang {
        Language::En => WEEKDAYS_SHORT_EN,
        Language::Ar => WEEKDAYS_SHORT_AR,
    }
}

fn weekday_long(day: Weekday, lang: Language) -> &'static str {
    let idx = usize::from(day.number_days_from_sunday());
    match lang {
        Language::En => WEEKDAYS_LONG_EN[idx],
        Language::Ar => WEEKDAYS_LONG_AR[idx],
    }
}

/// Calendar caption, e.g. `January 2026`.
pub fn month_caption(year: i32, month: Month, lang: Language) -> String {
    format!("{} {year}", month_name(month, lang))
}

/// Long date with weekday, month, day and year in the language's word order.
pub fn format_long_date(date: Date, lang: Language) -> String {
    let weekday = weekday_long(date.weekday(), lang);
    let month = month_name(date.month(), lang);
    match lang {
        Language::En => format!("{weekday}, {month} {}, {}", date.day(), date.year()),
        Language::Ar => format!("{weekday}، {} {month} {}", date.day(), date.year()),
    }
}

pub fn format_total_price(total: u32, lang: Language) -> String {
    match lang {
        Language::En => format!("Total Price: {total} JOD"),
        Language::Ar => format!("السعر الإجمالي: {total} دينار"),
    }
}

// -- Navigation and header ---------------------------------------------------

pub const BRAND: Bilingual = Bilingual::new("Halawah", "حلاوة");
pub const NAV_HOME: Bilingual = Bilingual::new("Home", "الرئيسية");
pub const NAV_ABOUT: Bilingual = Bilingual::new("About", "من نحن");
pub const NAV_RESERVATION: Bilingual = Bilingual::new("Reservation", "الحجز");
pub const NAV_REVIEWS: Bilingual = Bilingual::new("Reviews", "التقييمات");
pub const NAV_FAQ: Bilingual = Bilingual::new("FAQ", "الأسئلة");
pub const NAV_CONTACT: Bilingual = Bilingual::new("Contact", "تواصل معنا");
pub const MENU_TOGGLE: Bilingual = Bilingual::new("Open menu", "فتح القائمة");
pub const THEME_CYCLE: Bilingual = Bilingual::new("Switch theme", "تغيير المظهر");
pub const THEME_LIGHT: Bilingual = Bilingual::new("Light", "فاتح");
pub const THEME_DARK: Bilingual = Bilingual::new("Dark", "داكن");
pub const THEME_GREY: Bilingual = Bilingual::new("Grey", "رمادي");
pub const LANGUAGE_LABEL: Bilingual = Bilingual::new("Language", "اللغة");
pub const LANGUAGE_EN: Bilingual = Bilingual::new("English", "English");
pub const LANGUAGE_AR: Bilingual = Bilingual::new("العربية", "العربية");

// -- Hero and about ----------------------------------------------------------

pub const HERO_TITLE: Bilingual = Bilingual::new("Authentic Jordanian Sweets & Dining", "حلويات ومأكولات أردنية أصيلة");
pub const HERO_SUBTITLE: Bilingual = Bilingual::new(
    "Traditional recipes, served fresh every Thursday to Saturday.",
    "وصفات تقليدية تقدم طازجة من الخميس إلى السبت.",
);
pub const BOOK_NOW: Bilingual = Bilingual::new("Book Now", "احجز الآن");
pub const ABOUT_TITLE: Bilingual = Bilingual::new("About Us", "من نحن");
pub const ABOUT_TEXT: Bilingual = Bilingual::new(
    "A family kitchen bringing the flavors of Amman to your table.",
    "مطبخ عائلي يقدم نكهات عمّان إلى مائدتك.",
);

// -- Reservation -------------------------------------------------------------

pub const RESERVATION_TITLE: Bilingual = Bilingual::new("Book a Table", "احجز طاولة");
pub const STEP_DATE_TITLE: Bilingual = Bilingual::new("Choose a date", "اختر التاريخ");
pub const STEP_DETAILS_TITLE: Bilingual = Bilingual::new("Your details", "بياناتك");
pub const STEP_CONFIRM_TITLE: Bilingual = Bilingual::new("Reservation confirmed", "تم تأكيد الحجز");
pub const CALENDAR_PREV: Bilingual = Bilingual::new("Previous month", "الشهر السابق");
pub const CALENDAR_NEXT: Bilingual = Bilingual::new("Next month", "الشهر التالي");
pub const CALENDAR_HINT: Bilingual = Bilingual::new(
    "Reservations are available Thursday to Saturday from January 20, 2026.",
    "الحجوزات متاحة من الخميس إلى السبت ابتداءً من 20 يناير 2026.",
);
pub const SCARCITY_BADGE: Bilingual = Bilingual::new("Almost Sold Out", "مقاعد محدودة");
pub const SELECTED_DATE_LABEL: Bilingual = Bilingual::new("Selected date:", "التاريخ المختار:");
pub const FULL_NAME_LABEL: Bilingual = Bilingual::new("Full name", "الاسم الكامل");
pub const FULL_NAME_PLACEHOLDER: Bilingual = Bilingual::new("First, father's and family name", "الاسم الأول واسم الأب والعائلة");
pub const PHONE_LABEL: Bilingual = Bilingual::new("Phone number", "رقم الهاتف");
pub const PHONE_PLACEHOLDER: Bilingual = Bilingual::new("07XXXXXXXX", "07XXXXXXXX");
pub const PEOPLE_LABEL: Bilingual = Bilingual::new("Number of people", "عدد الأشخاص");
pub const PEOPLE_PLACEHOLDER: Bilingual = Bilingual::new("1 - 10", "1 - 10");
pub const MEAL_TIME_LABEL: Bilingual = Bilingual::new("Meal time", "وقت الوجبة");
pub const MEAL_TIME_PROMPT: Bilingual = Bilingual::new("Select meal time", "اختر وقت الوجبة");
pub const MEAL_LUNCH: Bilingual = Bilingual::new("Lunch", "غداء");
pub const MEAL_DINNER: Bilingual = Bilingual::new("Dinner", "عشاء");
pub const PRICE_PER_PERSON: Bilingual = Bilingual::new("Price per person: 20 JOD", "السعر للشخص: 20 دينار");
pub const CAPACITY_NOTE: Bilingual = Bilingual::new("Maximum 10 people per reservation", "الحد الأقصى 10 أشخاص لكل حجز");
pub const SUBMIT_RESERVATION: Bilingual = Bilingual::new("Confirm Reservation", "تأكيد الحجز");
pub const BACK_TO_CALENDAR: Bilingual = Bilingual::new("Back", "رجوع");
pub const CONFIRMED_TEXT: Bilingual = Bilingual::new(
    "Thank you! Your reservation has been received.",
    "شكراً لك! تم استلام حجزك.",
);
pub const NEW_RESERVATION: Bilingual = Bilingual::new("Make another reservation", "حجز جديد");

pub const ERR_NAME_REQUIRED: Bilingual = Bilingual::new("Full name is required", "الاسم الكامل مطلوب");
pub const ERR_NAME_WORDS: Bilingual = Bilingual::new(
    "Please enter full name (at least 3 words)",
    "يرجى إدخال الاسم الكامل (ثلاثة أسماء على الأقل)",
);
pub const ERR_PHONE_REQUIRED: Bilingual = Bilingual::new("Phone number is required", "رقم الهاتف مطلوب");
pub const ERR_PHONE_FORMAT: Bilingual = Bilingual::new(
    "Please enter a valid Jordanian phone number (07XXXXXXXX)",
    "يرجى إدخال رقم هاتف أردني صحيح (07XXXXXXXX)",
);
pub const ERR_PEOPLE: Bilingual = Bilingual::new("Please select number of people", "يرجى اختيار عدد الأشخاص");
pub const ERR_MEAL_TIME: Bilingual = Bilingual::new("Please select meal time", "يرجى اختيار وقت الوجبة");
pub const ERR_DATE: Bilingual = Bilingual::new("Please choose a date first", "يرجى اختيار التاريخ أولاً");

// -- Payment -----------------------------------------------------------------

pub const PAYMENT_TITLE: Bilingual = Bilingual::new("Choose a payment method", "اختر طريقة الدفع");
pub const PAY_CARD: Bilingual = Bilingual::new("Credit Card", "بطاقة ائتمان");
pub const PAY_CLIQ: Bilingual = Bilingual::new("cliQ", "cliQ");
pub const PAY_ARRIVAL: Bilingual = Bilingual::new("Pay on Arrival", "الدفع عند الوصول");
pub const CARD_NUMBER_LABEL: Bilingual = Bilingual::new("Card number", "رقم البطاقة");
pub const CARD_NAME_LABEL: Bilingual = Bilingual::new("Cardholder name", "اسم حامل البطاقة");
pub const CARD_EXPIRY_LABEL: Bilingual = Bilingual::new("Expiry (MM/YY)", "تاريخ الانتهاء (MM/YY)");
pub const CARD_CVV_LABEL: Bilingual = Bilingual::new("CVV", "CVV");
pub const CARD_PAY: Bilingual = Bilingual::new("Pay", "ادفع");
pub const CARD_CANCEL: Bilingual = Bilingual::new("Cancel", "إلغاء");
pub const ERR_CARD_NUMBER: Bilingual = Bilingual::new("Invalid card number", "رقم البطاقة غير صحيح");
pub const ERR_CARD_NAME: Bilingual = Bilingual::new("Cardholder name is required", "اسم حامل البطاقة مطلوب");
pub const ERR_CARD_EXPIRY: Bilingual = Bilingual::new("Invalid expiry date", "تاريخ الانتهاء غير صحيح");
pub const ERR_CARD_CVV: Bilingual = Bilingual::new("Invalid CVV", "CVV غير صحيح");
pub const NOTICE_CLIQ: Bilingual = Bilingual::new(
    "You will be redirected to cliQ payment page",
    "سيتم توجيهك إلى صفحة الدفع عبر cliQ",
);
pub const NOTICE_ARRIVAL: Bilingual = Bilingual::new(
    "Payment will be made upon arrival. Thank you!",
    "سيتم الدفع عند الوصول. شكراً لك!",
);
pub const NOTICE_CARD_SUCCESS: Bilingual = Bilingual::new("Payment successful! Thank you!", "تم الدفع بنجاح! شكراً لك!");

// -- Reviews, FAQ, footer ----------------------------------------------------

pub const REVIEWS_TITLE: Bilingual = Bilingual::new("What Our Guests Say", "ماذا يقول ضيوفنا");
pub const CAROUSEL_PREV: Bilingual = Bilingual::new("Previous reviews", "التقييمات السابقة");
pub const CAROUSEL_NEXT: Bilingual = Bilingual::new("Next reviews", "التقييمات التالية");
pub const FAQ_TITLE: Bilingual = Bilingual::new("Frequently Asked Questions", "الأسئلة الشائعة");
pub const CONTACT_TITLE: Bilingual = Bilingual::new("Share & Contact", "شارك وتواصل");
pub const COPY_LINK: Bilingual = Bilingual::new("Copy Link", "نسخ الرابط");
pub const COPY_DONE: Bilingual = Bilingual::new("Copied!", "تم النسخ!");
pub const COPY_FAILED: Bilingual = Bilingual::new("Failed to copy", "فشل النسخ");
pub const FOOTER_RIGHTS: Bilingual = Bilingual::new("© 2026 Halawah. All rights reserved.", "© 2026 حلاوة. جميع الحقوق محفوظة.");

/// Every static label, used to check that language switching is reversible.
pub const ALL_LABELS: &[Bilingual] = &[
    BRAND, NAV_HOME, NAV_ABOUT, NAV_RESERVATION, NAV_REVIEWS, NAV_FAQ, NAV_CONTACT, MENU_TOGGLE, THEME_CYCLE,
    THEME_LIGHT, THEME_DARK, THEME_GREY, LANGUAGE_LABEL, LANGUAGE_EN, LANGUAGE_AR, HERO_TITLE, HERO_SUBTITLE,
    BOOK_NOW, ABOUT_TITLE, ABOUT_TEXT, RESERVATION_TITLE, STEP_DATE_TITLE, STEP_DETAILS_TITLE, STEP_CONFIRM_TITLE,
    CALENDAR_PREV, CALENDAR_NEXT, CALENDAR_HINT, SCARCITY_BADGE, SELECTED_DATE_LABEL, FULL_NAME_LABEL,
    FULL_NAME_PLACEHOLDER, PHONE_LABEL, PHONE_PLACEHOLDER, PEOPLE_LABEL, PEOPLE_PLACEHOLDER, MEAL_TIME_LABEL,
    MEAL_TIME_PROMPT, MEAL_LUNCH, MEAL_DINNER, PRICE_PER_PERSON, CAPACITY_NOTE, SUBMIT_RESERVATION,
    BACK_TO_CALENDAR, CONFIRMED_TEXT, NEW_RESERVATION, ERR_NAME_REQUIRED, ERR_NAME_WORDS, ERR_PHONE_REQUIRED,
    ERR_PHONE_FORMAT, ERR_PEOPLE, ERR_MEAL_TIME, ERR_DATE, PAYMENT_TITLE, PAY_CARD, PAY_CLIQ, PAY_ARRIVAL,
    CARD_NUMBER_LABEL, CARD_NAME_LABEL, CARD_EXPIRY_LABEL, CARD_CVV_LABEL, CARD_PAY, CARD_CANCEL,
    ERR_CARD_NUMBER, ERR_CARD_NAME, ERR_CARD_EXPIRY, ERR_CARD_CVV, NOTICE_CLIQ, NOTICE_ARRIVAL,
    NOTICE_CARD_SUCCESS, REVIEWS_TITLE, CAROUSEL_PREV, CAROUSEL_NEXT, FAQ_TITLE, CONTACT_TITLE, COPY_LINK,
    COPY_DONE, COPY_FAILED, FOOTER_RIGHTS,
];
