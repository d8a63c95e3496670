// src/locale.rs
//
// UI language selection and the static translation tables. The language
// also decides which language the model is asked to write its reasoning in.

use serde::{Deserialize, Serialize};

use crate::charts::defaults::{MENS_JACKETS_CHART_ID, SPORTSWEAR_CHART_ID, UNIVERSAL_CHART_ID};
use crate::charts::ChartCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Uk,
    En,
    Ru,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Uk, Language::En, Language::Ru];

    pub fn code(self) -> &'static str {
        match self {
            Language::Uk => "uk",
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// Short label shown in the language selector.
    pub fn short_label(self) -> &'static str {
        match self {
            Language::Uk => "UA",
            Language::En => "EN",
            Language::Ru => "RU",
        }
    }

    /// English name of the language, used in the prompt to tell the model
    /// which language to write its reasoning in.
    pub fn reasoning_language(self) -> &'static str {
        match self {
            Language::Uk => "Ukrainian",
            Language::En => "English",
            Language::Ru => "Russian",
        }
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Language::Uk => &UK,
            Language::En => &EN,
            Language::Ru => &RU,
        }
    }
}

/// Every user-visible string, one table per supported language.
#[derive(Debug)]
pub struct Translations {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub select_category: &'static str,
    pub using_table: &'static str,
    pub rows: &'static str,
    pub show_table: &'static str,
    pub hide_table: &'static str,
    pub instructions_title: &'static str,
    pub instructions_step1: &'static str,
    pub instructions_step2: &'static str,
    pub instructions_step3: &'static str,
    pub instructions_note: &'static str,
    pub error_analysis: &'static str,

    pub chart_universal: &'static str,
    pub chart_mens_jackets: &'static str,
    pub chart_sportswear: &'static str,

    pub photo_label: &'static str,
    pub drag_drop: &'static str,
    pub or_click: &'static str,
    pub file_hint: &'static str,
    pub height_label: &'static str,
    pub weight_label: &'static str,
    pub analyze_btn: &'static str,
    pub analyzing_btn: &'static str,
    pub privacy_note: &'static str,

    pub rec_title: &'static str,
    pub ai_estimates: &'static str,
    pub chest: &'static str,
    pub waist: &'static str,
    pub hips: &'static str,
    pub try_again: &'static str,

    pub editor_title: &'static str,
    pub your_categories: &'static str,
    pub add_table: &'static str,
    pub category_name_placeholder: &'static str,
    pub add_column: &'static str,
    pub add_row: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub error_unique: &'static str,
    pub error_empty: &'static str,
    pub error_delete_last: &'static str,
    pub new_column: &'static str,
}

/// Display name for a chart: the three built-in ids get translated names,
/// user-created charts keep whatever the user typed.
pub fn chart_display_name<'a>(t: &'static Translations, chart: &'a ChartCategory) -> &'a str {
    match chart.id.as_str() {
        UNIVERSAL_CHART_ID => t.chart_universal,
        MENS_JACKETS_CHART_ID => t.chart_mens_jackets,
        SPORTSWEAR_CHART_ID => t.chart_sportswear,
        _ => &chart.name,
    }
}

static UK: Translations = Translations {
    app_title: "AI-підбір розміру",
    app_subtitle: "Завантажте фото, вкажіть зріст і вагу — штучний інтелект порадить ваш розмір одягу.",
    select_category: "Оберіть категорію одягу",
    using_table: "Використовується таблиця",
    rows: "рядків",
    show_table: "Показати таблицю",
    hide_table: "Сховати таблицю",
    instructions_title: "Як це працює",
    instructions_step1: "Завантажте фото в повний зріст на нейтральному фоні.",
    instructions_step2: "Вкажіть зріст (обовʼязково) та вагу (за бажанням).",
    instructions_step3: "Отримайте рекомендований розмір і орієнтовні заміри тіла.",
    instructions_note: "Таблиці розмірів можна редагувати в налаштуваннях.",
    error_analysis: "Не вдалося проаналізувати фото. Спробуйте ще раз.",

    chart_universal: "Універсальна таблиця",
    chart_mens_jackets: "Чоловічі куртки",
    chart_sportswear: "Спортивні костюми",

    photo_label: "Ваше фото",
    drag_drop: "Перетягніть фото сюди",
    or_click: "або натисніть, щоб обрати файл",
    file_hint: "JPG, PNG або WEBP",
    height_label: "Зріст, см",
    weight_label: "Вага, кг (необовʼязково)",
    analyze_btn: "Підібрати розмір",
    analyzing_btn: "Аналізуємо...",
    privacy_note: "Фото надсилається лише для аналізу та ніде не зберігається.",

    rec_title: "Рекомендований розмір",
    ai_estimates: "Оцінки AI",
    chest: "Груди",
    waist: "Талія",
    hips: "Стегна",
    try_again: "Спробувати ще раз",

    editor_title: "Редактор таблиць розмірів",
    your_categories: "Ваші категорії",
    add_table: "Додати таблицю",
    category_name_placeholder: "Назва категорії",
    add_column: "Додати стовпець",
    add_row: "Додати рядок",
    save: "Зберегти",
    cancel: "Скасувати",
    error_unique: "Назви стовпців мають бути унікальними",
    error_empty: "Назва стовпця не може бути порожньою",
    error_delete_last: "Неможливо видалити останню категорію",
    new_column: "Нова колонка",
};

static EN: Translations = Translations {
    app_title: "AI Size Assistant",
    app_subtitle: "Upload a photo, enter your height and weight — AI will recommend your clothing size.",
    select_category: "Select a clothing category",
    using_table: "Using table",
    rows: "rows",
    show_table: "Show table",
    hide_table: "Hide table",
    instructions_title: "How it works",
    instructions_step1: "Upload a full-height photo against a neutral background.",
    instructions_step2: "Enter your height (required) and weight (optional).",
    instructions_step3: "Get a recommended size with estimated body measurements.",
    instructions_note: "Size charts can be edited in the settings.",
    error_analysis: "Failed to analyze the photo. Please try again.",

    chart_universal: "Universal chart",
    chart_mens_jackets: "Men's jackets",
    chart_sportswear: "Sportswear",

    photo_label: "Your photo",
    drag_drop: "Drag a photo here",
    or_click: "or click to choose a file",
    file_hint: "JPG, PNG or WEBP",
    height_label: "Height, cm",
    weight_label: "Weight, kg (optional)",
    analyze_btn: "Find my size",
    analyzing_btn: "Analyzing...",
    privacy_note: "The photo is sent for analysis only and is never stored.",

    rec_title: "Recommended size",
    ai_estimates: "AI estimates",
    chest: "Chest",
    waist: "Waist",
    hips: "Hips",
    try_again: "Try again",

    editor_title: "Size chart editor",
    your_categories: "Your categories",
    add_table: "Add table",
    category_name_placeholder: "Category name",
    add_column: "Add column",
    add_row: "Add row",
    save: "Save",
    cancel: "Cancel",
    error_unique: "Column headers must be unique",
    error_empty: "Column headers cannot be empty",
    error_delete_last: "The last category cannot be deleted",
    new_column: "New column",
};

static RU: Translations = Translations {
    app_title: "AI-подбор размера",
    app_subtitle: "Загрузите фото, укажите рост и вес — искусственный интеллект подберёт ваш размер одежды.",
    select_category: "Выберите категорию одежды",
    using_table: "Используется таблица",
    rows: "строк",
    show_table: "Показать таблицу",
    hide_table: "Скрыть таблицу",
    instructions_title: "Как это работает",
    instructions_step1: "Загрузите фото в полный рост на нейтральном фоне.",
    instructions_step2: "Укажите рост (обязательно) и вес (по желанию).",
    instructions_step3: "Получите рекомендованный размер и ориентировочные замеры тела.",
    instructions_note: "Таблицы размеров можно редактировать в настройках.",
    error_analysis: "Не удалось проанализировать фото. Попробуйте ещё раз.",

    chart_universal: "Универсальная таблица",
    chart_mens_jackets: "Мужские куртки",
    chart_sportswear: "Спортивные костюмы",

    photo_label: "Ваше фото",
    drag_drop: "Перетащите фото сюда",
    or_click: "или нажмите, чтобы выбрать файл",
    file_hint: "JPG, PNG или WEBP",
    height_label: "Рост, см",
    weight_label: "Вес, кг (необязательно)",
    analyze_btn: "Подобрать размер",
    analyzing_btn: "Анализируем...",
    privacy_note: "Фото отправляется только для анализа и нигде не сохраняется.",

    rec_title: "Рекомендованный размер",
    ai_estimates: "Оценки AI",
    chest: "Грудь",
    waist: "Талия",
    hips: "Бёдра",
    try_again: "Попробовать ещё раз",

    editor_title: "Редактор таблиц размеров",
    your_categories: "Ваши категории",
    add_table: "Добавить таблицу",
    category_name_placeholder: "Название категории",
    add_column: "Добавить столбец",
    add_row: "Добавить строку",
    save: "Сохранить",
    cancel: "Отмена",
    error_unique: "Названия столбцов должны быть уникальными",
    error_empty: "Название столбца не может быть пустым",
    error_delete_last: "Нельзя удалить последнюю категорию",
    new_column: "Новый столбец",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::defaults::default_charts;

    #[test]
    fn builtin_chart_names_are_localized() {
        let charts = default_charts();
        let t = Language::En.translations();
        assert_eq!(chart_display_name(t, &charts[0]), "Universal chart");
        assert_eq!(chart_display_name(t, &charts[1]), "Men's jackets");
    }

    #[test]
    fn custom_chart_names_pass_through() {
        let chart = ChartCategory::new("custom_abc", "Моя таблиця", Vec::new());
        for lang in Language::ALL {
            assert_eq!(chart_display_name(lang.translations(), &chart), "Моя таблиця");
        }
    }

    #[test]
    fn reasoning_language_names() {
        assert_eq!(Language::Uk.reasoning_language(), "Ukrainian");
        assert_eq!(Language::En.reasoning_language(), "English");
        assert_eq!(Language::Ru.reasoning_language(), "Russian");
    }
}
