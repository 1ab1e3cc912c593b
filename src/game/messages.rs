//! Player-facing texts

use crate::core::Word;

pub const WRONG_LENGTH: &str = "5 harfdan iborat so‘z kiriting!";
pub const NOT_IN_LIST: &str = "So‘z ro‘yxatda yo‘q.";
pub const WON: &str = "🎉 To‘g‘ri topdingiz!";
pub const LOADING: &str = "So‘zlar yuklanmoqda…";

#[must_use]
pub fn lost(target: &Word) -> String {
    format!("❌ Tugadi! So‘z: {target}")
}

pub const HELP_TITLE: &str = "Qanday o‘ynash kerak";
pub const HELP_INTRO: &str = "5 harfdan iborat so‘zni 6 urinishda toping. Har bir urinishdan so‘ng \
     harflarning rangi ularning to‘g‘ri so‘zga mos kelish-kelmasligini ko‘rsatadi.";
pub const HELP_CORRECT: &str = "Harf ham pozitsiyasi ham to‘g‘ri.";
pub const HELP_PRESENT: &str = "Harf to‘g‘ri, lekin joylashuvi noto‘g‘ri.";
pub const HELP_ABSENT: &str = "Harf so‘zda yo‘q.";
