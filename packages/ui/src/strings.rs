//! User-facing Persian copy.

// Validation
pub const EMAIL_INVALID: &str = "آدرس ایمیل نامعتبر است.";
pub const PASSWORD_TOO_SHORT: &str = "رمز عبور باید حداقل ۸ کاراکتر باشد.";
pub const NAME_REQUIRED: &str = "نام لازم می‌باشد.";
pub const PASSWORD_MISMATCH: &str = "رمزهای عبور مطابقت ندارند.";

// Tabs and cards
pub const TAB_SIGN_IN: &str = "ورود";
pub const TAB_SIGN_UP: &str = "ثبت نام";
pub const SIGN_IN_TITLE: &str = "ورود به حساب";
pub const SIGN_IN_DESCRIPTION: &str =
    "با استفاده از ایمیل و رمز عبور خود به حساب کاربری خود دسترسی پیدا کنید.";
pub const SIGN_UP_TITLE: &str = "ایجاد حساب کاربری";
pub const SIGN_UP_DESCRIPTION: &str =
    "یک حساب کاربری جدید ایجاد کنید. یک رمز عبور قوی انتخاب کنید.";

// Fields
pub const LABEL_NAME: &str = "نام و نام‌خانوادگی";
pub const LABEL_EMAIL: &str = "ایمیل";
pub const LABEL_PASSWORD: &str = "رمز عبور";
pub const LABEL_CONFIRM_PASSWORD: &str = "تایید رمز عبور";
pub const LABEL_REMEMBER_ME: &str = "مرا به خاطر بسپار";
pub const PLACEHOLDER_NAME: &str = "سینا تفنگ ساز";
pub const PLACEHOLDER_EMAIL: &str = "m@example.com";
pub const PLACEHOLDER_PASSWORD: &str = "********";

// Buttons
pub const SIGN_IN_SUBMIT: &str = "ورود";
pub const SIGN_IN_PENDING: &str = "در حال ورود...";
pub const SIGN_UP_SUBMIT: &str = "ایجاد حساب";
pub const SIGN_UP_PENDING: &str = "در حال ایجاد حساب...";
pub const SIGN_OUT: &str = "خروج";

// Toasts
pub const SIGN_IN_SUCCESS: &str = "ورود با موفقیت انجام شد";
pub const SIGN_IN_FAILURE: &str = "خطا در ورود به حساب";
pub const SIGN_IN_FALLBACK: &str = "ایمیل یا رمز عبور نامعتبر است. لطفا دوباره تلاش کنید.";
pub const SIGN_UP_SUCCESS: &str = "حساب کاربری شما با موفقیت ساخته شد";
pub const SIGN_UP_FAILURE: &str = "خطا در ایجاد حساب کاربری";
pub const SIGN_UP_FALLBACK: &str = "لطفا برای رفع مشکل با ادمین تماس بگیرید.";
pub const SIGN_OUT_SUCCESS: &str = "خروج با موفقیت انجام شد";
pub const SIGN_OUT_FAILURE: &str = "خطا در خروج از حساب";
pub const UNAUTHORIZED: &str = "دسترسی غیر مجاز";

// Session refresh
pub const REFRESH_FAILED: &str = "Failed to refresh session";
pub const REFRESH_FALLBACK: &str = "can't retrieve a cookie";
