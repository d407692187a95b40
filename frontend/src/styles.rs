pub const CONTAINER: &str = "min-h-screen w-full bg-gray-900 text-gray-100 px-4 sm:px-6 lg:px-8";
pub const HEADER: &str = "flex flex-col items-center pt-8 pb-4";
pub const TITLE: &str = "text-4xl font-black tracking-tight text-[#EBB238]";
pub const SUBTITLE: &str = "mt-1 text-lg text-gray-400";
pub const MAIN: &str = "flex flex-col items-center pb-12";

pub const CARD: &str = "bg-gray-800 rounded-2xl shadow-xl p-6 sm:p-8 max-w-2xl w-full mx-auto border border-gray-700";
pub const SETUP: &str = "flex flex-col items-center gap-4";
pub const SETUP_ROW: &str = "flex items-start gap-3";
pub const GAME: &str = "flex flex-col items-center gap-4";

pub const BUTTON_GOLD: &str = "inline-flex items-center justify-center px-6 py-2 rounded-lg font-semibold uppercase text-black bg-[#EBB238] hover:bg-[#D4B065] shadow-lg transition-all duration-300";
pub const BUTTON_GOLD_LARGE: &str = "inline-flex items-center justify-center px-10 py-3 rounded-lg text-lg font-bold uppercase text-black bg-[#EBB238] hover:bg-[#D4B065] shadow-lg transition-all duration-300";
pub const BUTTON_DISABLED: &str = "opacity-40 cursor-not-allowed pointer-events-none";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-3 py-1 text-sm font-medium uppercase text-white hover:bg-red-700";
pub const BUTTON_DANGER_OUTLINED: &str = "inline-flex items-center justify-center rounded-lg border border-red-500 px-3 py-1 text-sm font-medium uppercase text-red-400 hover:bg-red-900/20";

pub const INPUT: &str = "block w-24 rounded-lg border-0 bg-gray-900 py-2 px-3 text-white shadow-sm ring-1 ring-inset ring-gray-600 focus:ring-2 focus:ring-[#EBB238]";
pub const INPUT_ERROR: &str = "block w-24 rounded-lg border-0 bg-gray-900 py-2 px-3 text-white shadow-sm ring-2 ring-inset ring-red-500 focus:ring-2 focus:ring-red-500";

pub const TEXT_BODY: &str = "text-gray-300";
pub const TEXT_HINT: &str = "text-xs text-gray-400 mt-1";
pub const TEXT_ERROR: &str = "text-xs text-red-400 mt-1";
pub const TEXT_SMALL: &str = "text-sm text-gray-500";
pub const STATUS_TEXT: &str = "min-h-[1.5rem] text-center text-gray-200";

pub const WHEEL_CONTAINER: &str = "relative w-full max-w-[420px] mx-auto";
