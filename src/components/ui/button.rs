use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    Button {
        base: "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-lg text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 outline-none focus-visible:ring-2 focus-visible:ring-indigo-400/50 hover:cursor-pointer active:scale-[0.98] select-none",
        variants: {
            variant: {
                Default: "bg-gradient-to-r from-indigo-600 to-purple-600 text-white shadow-md hover:from-indigo-700 hover:to-purple-700 dark:from-[#6610f2] dark:to-[#9668f5]",
                Outline: "border border-gray-200 bg-white/70 text-gray-700 hover:bg-white dark:border-[#565449]/30 dark:bg-[#24242C] dark:text-[#d8cfbc]",
                Link: "text-indigo-600 underline-offset-4 hover:underline dark:text-[#9668f5]",
            },
            size: {
                Default: "h-10 px-4 py-2 has-[>svg]:px-3",
                Sm: "h-8 gap-1.5 px-3 has-[>svg]:px-2.5",
                Lg: "h-12 px-6 text-base has-[>svg]:px-4",
                Icon: "size-8",
                Fab: "size-14 rounded-full shadow-lg",
            }
        },
        component: {
            element: button,
            support_href: true,
            support_aria_current: true
        }
    }
}
