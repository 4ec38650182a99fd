// ABOUTME: Static English and Indonesian UI text, category labels, and daily tips
// ABOUTME: Lookup tables only; the active language comes from the session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

//! Bilingual text

use eco_bite_core::models::{Language, WasteCategory};
use rand::seq::SliceRandom;
use rand::Rng;

/// Labels for the four food groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryLabels {
    /// Bread and grains
    pub bread: &'static str,
    /// Fruit and vegetables
    pub fruit: &'static str,
    /// Dairy
    pub dairy: &'static str,
    /// Meat and protein
    pub meat: &'static str,
}

/// Every UI string for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Translations {
    pub welcome: &'static str,
    pub subtitle: &'static str,
    pub login_button: &'static str,
    pub username: &'static str,
    pub dashboard: &'static str,
    pub calculator: &'static str,
    pub recipes: &'static str,
    pub quiz: &'static str,
    pub commitment: &'static str,
    pub points: &'static str,
    pub streak: &'static str,
    pub waste_title: &'static str,
    pub waste_description: &'static str,
    pub calculate: &'static str,
    pub money_lost: &'static str,
    pub co2_emitted: &'static str,
    pub recipe_title: &'static str,
    pub recipe_description: &'static str,
    pub find_recipe: &'static str,
    pub ingredients_placeholder: &'static str,
    pub quiz_title: &'static str,
    pub quiz_description: &'static str,
    pub next_question: &'static str,
    pub loading: &'static str,
    pub pledge_title: &'static str,
    pub add_pledge: &'static str,
    pub pledge_placeholder: &'static str,
    pub categories: CategoryLabels,
}

impl Translations {
    /// Label for a food group
    #[must_use]
    pub const fn category_label(&self, category: WasteCategory) -> &'static str {
        match category {
            WasteCategory::Bread => self.categories.bread,
            WasteCategory::Fruit => self.categories.fruit,
            WasteCategory::Dairy => self.categories.dairy,
            WasteCategory::Meat => self.categories.meat,
        }
    }
}

const EN: Translations = Translations {
    welcome: "Welcome to Eco-Bite!",
    subtitle: "Reduce, Reuse, Recycle",
    login_button: "Let's Save Food!",
    username: "Your Name",
    dashboard: "Dashboard",
    calculator: "Calculator",
    recipes: "Magic Recipes",
    quiz: "Quiz Time",
    commitment: "My Pledge",
    points: "Points",
    streak: "Streak",
    waste_title: "Waste Calculator",
    waste_description: "Track what you throw away to see the impact!",
    calculate: "Calculate Impact",
    money_lost: "Money Lost",
    co2_emitted: "CO2e Emitted",
    recipe_title: "Leftover Remixer",
    recipe_description: "Tell us what ingredients you have, and AI will create a yummy recipe!",
    find_recipe: "Create Recipe",
    ingredients_placeholder: "e.g., 2 carrots, stale bread, half a lemon...",
    quiz_title: "Food Waste Trivia",
    quiz_description: "Test your knowledge and earn points!",
    next_question: "Next Question",
    loading: "Thinking...",
    pledge_title: "I Commit To...",
    add_pledge: "Add Pledge",
    pledge_placeholder: "e.g., Finish my plate every day",
    categories: CategoryLabels {
        bread: "Bread/Grains",
        fruit: "Fruit/Veg",
        dairy: "Dairy",
        meat: "Meat/Protein",
    },
};

const ID: Translations = Translations {
    welcome: "Selamat Datang di Eco-Bite!",
    subtitle: "Kurangi, Olah, Habiskan",
    login_button: "Ayo Selamatkan Makanan!",
    username: "Nama Kamu",
    dashboard: "Beranda",
    calculator: "Kalkulator",
    recipes: "Resep Ajaib",
    quiz: "Kuis Seru",
    commitment: "Janji Saya",
    points: "Poin",
    streak: "Rekor",
    waste_title: "Kalkulator Sampah",
    waste_description: "Catat apa yang kamu buang untuk melihat dampaknya!",
    calculate: "Hitung Dampak",
    money_lost: "Uang Terbuang",
    co2_emitted: "Emisi CO2e",
    recipe_title: "Pengolah Sisa Makanan",
    recipe_description: "Beritahu bahan apa yang kamu punya, AI akan buatkan resep lezat!",
    find_recipe: "Buat Resep",
    ingredients_placeholder: "cth: 2 wortel, roti kering, setengah lemon...",
    quiz_title: "Trivia Sampah Makanan",
    quiz_description: "Uji pengetahuanmu dan dapatkan poin!",
    next_question: "Pertanyaan Selanjutnya",
    loading: "Sedang berpikir...",
    pledge_title: "Saya Berjanji Untuk...",
    add_pledge: "Tambah Janji",
    pledge_placeholder: "cth: Menghabiskan makanan setiap hari",
    categories: CategoryLabels {
        bread: "Roti/Gandum",
        fruit: "Buah/Sayur",
        dairy: "Susu/Olahan",
        meat: "Daging/Protein",
    },
};

const TIPS_EN: [&str; 4] = [
    "Did you know? 1/3 of all food produced is lost or wasted.",
    "Store bananas separately to stop other fruit from ripening too fast!",
    "Use stale bread to make delicious croutons or breadcrumbs.",
    "Freeze leftovers if you can't eat them within 2 days.",
];

const TIPS_ID: [&str; 4] = [
    "Tahukah kamu? 1/3 dari seluruh makanan yang diproduksi terbuang sia-sia.",
    "Simpan pisang secara terpisah agar buah lain tidak cepat matang!",
    "Gunakan roti kering untuk membuat crouton atau tepung roti yang lezat.",
    "Bekukan sisa makanan jika kamu tidak bisa menghabiskannya dalam 2 hari.",
];

/// UI text for a language
#[must_use]
pub const fn translations(language: Language) -> &'static Translations {
    match language {
        Language::En => &EN,
        Language::Id => &ID,
    }
}

/// Food-waste tips for a language
#[must_use]
pub const fn tips(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => &TIPS_EN,
        Language::Id => &TIPS_ID,
    }
}

/// One tip picked at random
pub fn daily_tip<R: Rng + ?Sized>(language: Language, rng: &mut R) -> &'static str {
    tips(language).choose(rng).copied().unwrap_or_default()
}
