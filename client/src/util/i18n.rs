//! English/Arabic UI strings.
//!
//! DESIGN
//! ======
//! A static key -> `(en, ar)` table. Keys are dotted by page (`users.ban`,
//! `requests.price`). Unknown keys render as the key itself so a missing entry
//! is visible rather than blank. Interpolation uses `{name}` placeholders.
//! Arabic switches the document to right-to-left.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use crate::net::types::{JobStatus, PaymentType, QuoteStatus, Role, VerificationStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Ar => "rtl",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }
}

/// Translate `key` into `lang`.
pub fn t(lang: Language, key: &'static str) -> &'static str {
    match lookup(key) {
        Some((en, ar)) => match lang {
            Language::En => en,
            Language::Ar => ar,
        },
        None => key,
    }
}

/// Translate `key` and substitute `{placeholder}` values.
pub fn tf(lang: Language, key: &'static str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(t(lang, key).to_owned(), |text, (name, value)| text.replace(&format!("{{{name}}}"), value))
}

pub fn role_label(lang: Language, role: &Role) -> String {
    let key = match role {
        Role::Admin => "role.admin",
        Role::Moderator => "role.moderator",
        Role::Client => "role.client",
        Role::Craftsman => "role.craftsman",
        Role::Other(raw) => return raw.clone(),
    };
    t(lang, key).to_owned()
}

pub fn verification_label(lang: Language, status: &VerificationStatus) -> String {
    let key = match status {
        VerificationStatus::Pending => "status.pending",
        VerificationStatus::Verified => "status.verified",
        VerificationStatus::Rejected => "status.rejected",
        VerificationStatus::Other(raw) => return raw.clone(),
    };
    t(lang, key).to_owned()
}

pub fn job_status_label(lang: Language, status: &JobStatus) -> String {
    let key = match status {
        JobStatus::Posted => "job_status.posted",
        JobStatus::Quoted => "job_status.quoted",
        JobStatus::Hired => "job_status.hired",
        JobStatus::OnTheWay => "job_status.on_the_way",
        JobStatus::Completed => "job_status.completed",
        JobStatus::Cancelled => "job_status.cancelled",
        JobStatus::Disputed => "job_status.disputed",
        JobStatus::Other(raw) => return raw.clone(),
    };
    t(lang, key).to_owned()
}

pub fn payment_label(lang: Language, payment: &PaymentType) -> String {
    let key = match payment {
        PaymentType::Cash => "payment.cash",
        PaymentType::Visa => "payment.visa",
        PaymentType::Other(raw) => return raw.clone(),
    };
    t(lang, key).to_owned()
}

pub fn quote_status_label(lang: Language, status: &QuoteStatus) -> String {
    let key = match status {
        QuoteStatus::Submitted => "quote_status.submitted",
        QuoteStatus::Accepted => "quote_status.accepted",
        QuoteStatus::Declined => "quote_status.declined",
        QuoteStatus::Other(raw) => return raw.clone(),
    };
    t(lang, key).to_owned()
}

pub fn ban_label(lang: Language, banned: bool) -> &'static str {
    t(lang, if banned { "status.banned" } else { "status.active" })
}

#[allow(clippy::too_many_lines)]
fn lookup(key: &str) -> Option<(&'static str, &'static str)> {
    Some(match key {
        // common
        "app.title" => ("Admin Dashboard", "لوحة التحكم"),
        "app.not_found" => ("Page not found.", "الصفحة غير موجودة."),
        "common.loading" => ("Loading...", "جارٍ التحميل..."),
        "common.search" => ("Search", "بحث"),
        "common.cancel" => ("Cancel", "إلغاء"),
        "common.close" => ("Close", "إغلاق"),
        "common.save" => ("Save", "حفظ"),
        "common.saving" => ("Saving...", "جارٍ الحفظ..."),
        "common.edit" => ("Edit", "تعديل"),
        "common.delete" => ("Delete", "حذف"),
        "common.view" => ("View", "عرض"),
        "common.actions" => ("Actions", "الإجراءات"),
        "common.error" => ("Error", "خطأ"),
        "common.success" => ("Success", "تم بنجاح"),
        "common.ok" => ("OK", "حسناً"),
        "common.not_available" => ("N/A", "غير متوفر"),
        "common.unknown" => ("Unknown", "غير معروف"),
        "common.previous" => ("Previous", "السابق"),
        "common.next" => ("Next", "التالي"),
        "common.per_page" => ("Per page", "لكل صفحة"),
        "common.export_csv" => ("Export Excel (CSV)", "تصدير إكسل (CSV)"),
        "common.export_pdf" => ("Export PDF", "تصدير PDF"),
        "common.no_results" => ("No results found.", "لا توجد نتائج."),
        "common.page_of" => ("Page {page} of {total}", "صفحة {page} من {total}"),
        "common.fetch_error" => ("Failed to load data.", "فشل تحميل البيانات."),
        "common.created_at" => ("Created", "تاريخ الإنشاء"),
        "common.updated_at" => ("Updated", "آخر تحديث"),
        "common.status" => ("Status", "الحالة"),
        "common.name" => ("Name", "الاسم"),
        "common.email" => ("Email", "البريد الإلكتروني"),
        "common.phone" => ("Phone", "الهاتف"),
        "common.role" => ("Role", "الدور"),
        "common.country" => ("Country", "الدولة"),
        "common.city" => ("City", "المدينة"),
        "common.rating" => ("Rating", "التقييم"),
        "common.rating_count" => ("Reviews", "عدد التقييمات"),
        "common.all_statuses" => ("All statuses", "كل الحالات"),
        "common.no_data" => ("No data yet.", "لا توجد بيانات بعد."),
        // navigation
        "nav.dashboard" => ("Dashboard", "الرئيسية"),
        "nav.users" => ("Users", "المستخدمون"),
        "nav.craftsmen" => ("Craftsmen", "الحرفيون"),
        "nav.requests" => ("Requests", "الطلبات"),
        "nav.services" => ("Services", "الخدمات"),
        "nav.profile" => ("Profile", "الملف الشخصي"),
        "nav.logout" => ("Logout", "تسجيل الخروج"),
        "nav.dark_mode" => ("Dark mode", "الوضع الداكن"),
        "nav.light_mode" => ("Light mode", "الوضع الفاتح"),
        "nav.language" => ("العربية", "English"),
        "nav.menu" => ("Menu", "القائمة"),
        // roles & statuses
        "role.admin" => ("Admin", "مسؤول"),
        "role.moderator" => ("Moderator", "مشرف"),
        "role.client" => ("Client", "عميل"),
        "role.craftsman" => ("Craftsman", "حرفي"),
        "status.active" => ("Active", "نشط"),
        "status.banned" => ("Banned", "محظور"),
        "status.not_banned" => ("Not banned", "غير محظور"),
        "status.pending" => ("Pending", "قيد المراجعة"),
        "status.verified" => ("Verified", "موثّق"),
        "status.rejected" => ("Rejected", "مرفوض"),
        "job_status.posted" => ("Posted", "منشور"),
        "job_status.quoted" => ("Quoted", "تم تقديم عروض"),
        "job_status.hired" => ("Hired", "تم التعيين"),
        "job_status.on_the_way" => ("On the way", "في الطريق"),
        "job_status.completed" => ("Completed", "مكتمل"),
        "job_status.cancelled" => ("Cancelled", "ملغي"),
        "job_status.disputed" => ("Disputed", "متنازع عليه"),
        "payment.cash" => ("Cash", "نقداً"),
        "payment.visa" => ("Visa", "فيزا"),
        "quote_status.submitted" => ("Submitted", "مُقدَّم"),
        "quote_status.accepted" => ("Accepted", "مقبول"),
        "quote_status.declined" => ("Declined", "مرفوض"),
        // login / logout
        "login.title" => ("Admin Login", "تسجيل دخول المسؤول"),
        "login.subtitle" => ("Sign in to manage the marketplace", "سجّل الدخول لإدارة المنصة"),
        "login.email" => ("Email", "البريد الإلكتروني"),
        "login.password" => ("Password", "كلمة المرور"),
        "login.submit" => ("Sign in", "تسجيل الدخول"),
        "login.signing_in" => ("Signing in...", "جارٍ تسجيل الدخول..."),
        "login.fields_required" => ("Enter both email and password.", "أدخل البريد الإلكتروني وكلمة المرور."),
        "login.failed" => ("Login failed. Check your credentials.", "فشل تسجيل الدخول. تحقق من بياناتك."),
        "login.not_admin" => ("You are not authorized as admin.", "ليس لديك صلاحية المسؤول."),
        "logout.confirm_title" => ("Log out?", "تسجيل الخروج؟"),
        "logout.confirm_text" => ("You will need to sign in again.", "ستحتاج إلى تسجيل الدخول مرة أخرى."),
        // overview
        "overview.title" => ("Overview", "نظرة عامة"),
        "overview.stat_users" => ("Total users", "إجمالي المستخدمين"),
        "overview.stat_verified_craftsmen" => ("Verified craftsmen", "الحرفيون الموثقون"),
        "overview.stat_jobs" => ("Total jobs", "إجمالي الطلبات"),
        "overview.stat_jobs_today" => ("Jobs today", "طلبات اليوم"),
        "overview.stat_completed" => ("Completed jobs", "الطلبات المكتملة"),
        "overview.stat_ongoing" => ("Ongoing jobs", "الطلبات الجارية"),
        "overview.stat_cancelled" => ("Cancelled jobs", "الطلبات الملغاة"),
        "overview.stat_average_rating" => ("Average rating", "متوسط التقييم"),
        "overview.chart_jobs_by_month" => ("Jobs by month", "الطلبات حسب الشهر"),
        "overview.chart_user_growth" => ("User growth", "نمو المستخدمين"),
        "overview.chart_craftsmen_by_category" => ("Craftsmen by service", "الحرفيون حسب الخدمة"),
        // users
        "users.title" => ("Users", "المستخدمون"),
        "users.search_placeholder" => ("Search by name, email, phone, role or country", "ابحث بالاسم أو البريد أو الهاتف أو الدور أو الدولة"),
        "users.all_roles" => ("All roles", "كل الأدوار"),
        "users.ban" => ("Ban", "حظر"),
        "users.unban" => ("Unban", "إلغاء الحظر"),
        "users.view_details" => ("View details", "عرض التفاصيل"),
        "users.confirm_ban_title" => ("Ban user?", "حظر المستخدم؟"),
        "users.confirm_ban_text" => ("{name} will no longer be able to use the platform.", "لن يتمكن {name} من استخدام المنصة."),
        "users.confirm_unban_title" => ("Unban user?", "إلغاء حظر المستخدم؟"),
        "users.confirm_unban_text" => ("{name} will regain access to the platform.", "سيستعيد {name} الوصول إلى المنصة."),
        "users.ban_success" => ("User banned.", "تم حظر المستخدم."),
        "users.unban_success" => ("User unbanned.", "تم إلغاء حظر المستخدم."),
        "users.action_error" => ("The action could not be completed.", "تعذر إتمام الإجراء."),
        "users.no_users" => ("No users found.", "لا يوجد مستخدمون."),
        "users.details_title" => ("User details", "تفاصيل المستخدم"),
        "users.address" => ("Address", "العنوان"),
        "users.wallet" => ("Wallet", "المحفظة"),
        "users.balance" => ("Balance", "الرصيد"),
        "users.withdrawable" => ("Withdrawable", "قابل للسحب"),
        "users.logs" => ("Activity", "النشاط"),
        "users.last_login" => ("Last login", "آخر تسجيل دخول"),
        "users.last_logout" => ("Last logout", "آخر تسجيل خروج"),
        "users.last_ip" => ("Last IP", "آخر عنوان IP"),
        "users.craftsman_info" => ("Craftsman info", "معلومات الحرفي"),
        "users.service" => ("Service", "الخدمة"),
        "users.skills" => ("Skills", "المهارات"),
        "users.bio" => ("Bio", "نبذة"),
        "users.verification_status" => ("Verification", "التوثيق"),
        "users.documents" => ("Verification documents", "وثائق التوثيق"),
        "users.portfolio" => ("Portfolio", "معرض الأعمال"),
        "users.joined" => ("Joined", "تاريخ الانضمام"),
        "users.ban_reason" => ("Ban reason", "سبب الحظر"),
        "users.create_admin" => ("Create admin", "إنشاء مسؤول"),
        // create admin
        "admin.title" => ("Create admin account", "إنشاء حساب مسؤول"),
        "admin.full_name" => ("Full name", "الاسم الكامل"),
        "admin.phone_optional" => ("Phone (optional)", "الهاتف (اختياري)"),
        "admin.password" => ("Password", "كلمة المرور"),
        "admin.submit" => ("Create", "إنشاء"),
        "admin.success" => ("Admin account created.", "تم إنشاء حساب المسؤول."),
        "admin.error" => ("Failed to create admin.", "فشل إنشاء المسؤول."),
        // craftsmen
        "craftsmen.title" => ("Craftsmen", "الحرفيون"),
        "craftsmen.stat_total" => ("Total craftsmen", "إجمالي الحرفيين"),
        "craftsmen.stat_pending" => ("Pending", "قيد المراجعة"),
        "craftsmen.stat_verified" => ("Verified", "موثّقون"),
        "craftsmen.stat_rejected" => ("Rejected", "مرفوضون"),
        "craftsmen.stat_banned" => ("Banned", "محظورون"),
        "craftsmen.pending_title" => ("Pending verifications", "طلبات التوثيق المعلقة"),
        "craftsmen.no_pending" => ("No pending verifications.", "لا توجد طلبات توثيق معلقة."),
        "craftsmen.view_documents" => ("View documents", "عرض الوثائق"),
        "craftsmen.approve" => ("Approve", "قبول"),
        "craftsmen.reject" => ("Reject", "رفض"),
        "craftsmen.confirm_approve_title" => ("Approve verification?", "قبول التوثيق؟"),
        "craftsmen.confirm_approve_text" => ("Approve the verification of {name}?", "هل تريد قبول توثيق {name}؟"),
        "craftsmen.confirm_reject_title" => ("Reject verification?", "رفض التوثيق؟"),
        "craftsmen.confirm_reject_text" => ("Reject the verification of {name}?", "هل تريد رفض توثيق {name}؟"),
        "craftsmen.approve_success" => ("Craftsman verified.", "تم توثيق الحرفي."),
        "craftsmen.reject_success" => ("Verification rejected.", "تم رفض التوثيق."),
        "craftsmen.action_error" => ("The verification could not be updated.", "تعذر تحديث حالة التوثيق."),
        "craftsmen.documents_title" => ("Documents of {name}", "وثائق {name}"),
        "craftsmen.document_of" => ("Document {current} of {total}", "وثيقة {current} من {total}"),
        "craftsmen.no_documents" => ("No documents uploaded.", "لم يتم رفع أي وثائق."),
        "craftsmen.open_document" => ("Open in new tab", "فتح في علامة تبويب جديدة"),
        "craftsmen.chart_top_cities" => ("Top cities", "أكثر المدن"),
        "craftsmen.chart_verification" => ("Verification status", "حالة التوثيق"),
        "craftsmen.chart_avg_rating_by_service" => ("Average rating by service", "متوسط التقييم حسب الخدمة"),
        "craftsmen.search_placeholder" => ("Search by name, email or phone", "ابحث بالاسم أو البريد أو الهاتف"),
        "craftsmen.all_verification" => ("All verification states", "كل حالات التوثيق"),
        "craftsmen.all_ban" => ("Banned and active", "المحظورون والنشطون"),
        "craftsmen.all_skills" => ("All services", "كل الخدمات"),
        "craftsmen.all_cities" => ("All cities", "كل المدن"),
        "craftsmen.no_craftsmen" => ("No craftsmen found.", "لا يوجد حرفيون."),
        // requests (jobs)
        "requests.title" => ("Requests", "الطلبات"),
        "requests.stat_total" => ("Total jobs", "إجمالي الطلبات"),
        "requests.stat_in_progress" => ("In progress", "قيد التنفيذ"),
        "requests.stat_awaiting" => ("Awaiting offers", "بانتظار العروض"),
        "requests.stat_completed" => ("Completed", "مكتملة"),
        "requests.stat_cancelled" => ("Cancelled", "ملغاة"),
        "requests.stat_disputed" => ("Disputed", "متنازع عليها"),
        "requests.stat_today" => ("Created today", "أُنشئت اليوم"),
        "requests.search_placeholder" => ("Search by title or description", "ابحث بالعنوان أو الوصف"),
        "requests.all_services" => ("All services", "كل الخدمات"),
        "requests.all_payment_types" => ("All payment types", "كل طرق الدفع"),
        "requests.job_id" => ("Job ID", "رقم الطلب"),
        "requests.job_title" => ("Title", "العنوان"),
        "requests.description" => ("Description", "الوصف"),
        "requests.service" => ("Service", "الخدمة"),
        "requests.payment_type" => ("Payment", "طريقة الدفع"),
        "requests.client" => ("Client", "العميل"),
        "requests.craftsman" => ("Craftsman", "الحرفي"),
        "requests.address" => ("Address", "العنوان"),
        "requests.job_date" => ("Job date", "موعد التنفيذ"),
        "requests.not_assigned" => ("Not assigned", "غير معيّن"),
        "requests.not_scheduled" => ("Not scheduled", "غير مجدول"),
        "requests.no_service" => ("No service", "بدون خدمة"),
        "requests.no_jobs" => ("No jobs found.", "لا توجد طلبات."),
        "requests.details_title" => ("Job details", "تفاصيل الطلب"),
        "requests.photos" => ("Photos", "الصور"),
        "requests.no_photos" => ("No photos attached.", "لا توجد صور مرفقة."),
        "requests.location" => ("Location", "الموقع"),
        "requests.coordinates" => ("Coordinates", "الإحداثيات"),
        "requests.open_map" => ("Open in OpenStreetMap", "فتح في OpenStreetMap"),
        "requests.people" => ("People", "الأطراف"),
        "requests.timeline" => ("Timeline", "الجدول الزمني"),
        "requests.quotes" => ("Quotes", "العروض"),
        "requests.no_quotes" => ("No quotes yet.", "لا توجد عروض بعد."),
        "requests.price" => ("Price", "السعر"),
        "requests.notes" => ("Notes", "ملاحظات"),
        "requests.job_not_found" => ("Job not found.", "الطلب غير موجود."),
        "requests.showing" => ("Showing {shown} of {total} jobs", "عرض {shown} من {total} طلب"),
        // services
        "services.title" => ("Services", "الخدمات"),
        "services.stat_total" => ("Total services", "إجمالي الخدمات"),
        "services.stat_active" => ("Active services", "الخدمات النشطة"),
        "services.stat_unused" => ("Unused services", "الخدمات غير المستخدمة"),
        "services.chart_usage" => ("Craftsmen per service", "الحرفيون لكل خدمة"),
        "services.chart_most_requested" => ("Most requested services", "الخدمات الأكثر طلباً"),
        "services.chart_ratings" => ("Craftsmen ratings by service", "تقييمات الحرفيين حسب الخدمة"),
        "services.search_placeholder" => ("Search services", "ابحث في الخدمات"),
        "services.add" => ("Add service", "إضافة خدمة"),
        "services.create_title" => ("New service", "خدمة جديدة"),
        "services.edit_title" => ("Edit service", "تعديل الخدمة"),
        "services.name" => ("Service name", "اسم الخدمة"),
        "services.description" => ("Description", "الوصف"),
        "services.name_en" => ("Name (English)", "الاسم (بالإنجليزية)"),
        "services.name_ar" => ("Name (Arabic)", "الاسم (بالعربية)"),
        "services.description_en" => ("Description (English)", "الوصف (بالإنجليزية)"),
        "services.description_ar" => ("Description (Arabic)", "الوصف (بالعربية)"),
        "services.image" => ("Image", "الصورة"),
        "services.no_services" => ("No services found.", "لا توجد خدمات."),
        "services.confirm_delete_title" => ("Delete service?", "حذف الخدمة؟"),
        "services.confirm_delete_text" => ("\"{name}\" will be removed permanently.", "سيتم حذف \"{name}\" نهائياً."),
        "services.delete_success" => ("Service deleted.", "تم حذف الخدمة."),
        "services.delete_error" => ("Failed to delete the service.", "فشل حذف الخدمة."),
        "services.create_success" => ("Service created.", "تم إنشاء الخدمة."),
        "services.update_success" => ("Service updated.", "تم تحديث الخدمة."),
        "services.save_error" => ("Failed to save the service.", "فشل حفظ الخدمة."),
        "services.craftsmen_share" => ("{count} craftsmen ({percent}%)", "{count} حرفي ({percent}%)"),
        "services.details_title" => ("Service details", "تفاصيل الخدمة"),
        // profile
        "profile.title" => ("My profile", "ملفي الشخصي"),
        "profile.first_name" => ("First name", "الاسم الأول"),
        "profile.last_name" => ("Last name", "اسم العائلة"),
        "profile.picture" => ("Profile picture", "الصورة الشخصية"),
        "profile.edit" => ("Edit profile", "تعديل الملف"),
        "profile.update_success" => ("Profile updated.", "تم تحديث الملف الشخصي."),
        "profile.update_error" => ("Failed to update the profile.", "فشل تحديث الملف الشخصي."),
        "profile.not_provided" => ("Not provided", "غير مُدخل"),
        // validation
        "validation.email_required" => ("Email is required.", "البريد الإلكتروني مطلوب."),
        "validation.email_invalid" => ("Enter a valid email address.", "أدخل بريداً إلكترونياً صالحاً."),
        "validation.image_type" => ("Please choose an image file.", "يرجى اختيار ملف صورة."),
        "validation.image_size" => ("Images must be 5 MB or smaller.", "يجب ألا يتجاوز حجم الصورة 5 ميغابايت."),
        "validation.full_name_required" => ("Full name is required.", "الاسم الكامل مطلوب."),
        "validation.password_required" => ("Password is required.", "كلمة المرور مطلوبة."),
        "validation.password_short" => ("Password must be at least 8 characters.", "يجب أن تتكون كلمة المرور من 8 أحرف على الأقل."),
        "validation.role_invalid" => ("Choose admin or moderator.", "اختر مسؤولاً أو مشرفاً."),
        "validation.service_name_required" => ("Enter the name in at least one language.", "أدخل الاسم بلغة واحدة على الأقل."),
        "validation.service_description_required" => ("Enter the description in at least one language.", "أدخل الوصف بلغة واحدة على الأقل."),
        "validation.first_name_required" => ("First name is required.", "الاسم الأول مطلوب."),
        "validation.last_name_required" => ("Last name is required.", "اسم العائلة مطلوب."),
        // exports
        "export.users_title" => ("Users", "المستخدمون"),
        "export.craftsmen_title" => ("Craftsmen", "الحرفيون"),
        "export.jobs_title" => ("Jobs", "الطلبات"),
        _ => return None,
    })
}
