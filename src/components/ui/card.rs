use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "flex flex-col gap-5 rounded-2xl border border-white/50 bg-white/80 p-8 shadow-lg shadow-[#6610f2]/10 backdrop-blur-sm dark:border-[#565449]/30 dark:bg-[#1A1A21]/90 dark:shadow-[#6610f2]/20"}
    clx! {CardHeader, div, "flex flex-col items-center gap-1.5 text-center"}
    clx! {CardTitle, h2, "text-2xl font-bold text-gray-800 dark:text-[#fffbf4]"}
    clx! {CardDescription, p, "text-sm text-gray-600 dark:text-[#d8cfbc]"}
    clx! {CardContent, div, "flex flex-col gap-4"}
    clx! {CardFooter, footer, "flex items-center justify-center pt-2 text-sm text-gray-600 dark:text-[#d8cfbc]", "gap-1"}
}

pub use components::*;
