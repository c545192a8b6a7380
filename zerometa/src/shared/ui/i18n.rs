use crate::widgets::settings::model::Language;

/// UI strings with an English and an Arabic rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Label {
    Home,
    Layers,
    Settings,
    Support,
    LayersStore,
    LayersStoreHint,
    AvailableLayers,
    Welcome,
    WelcomeBody,
    Pin,
    Unpin,
    LayerDetailsBody,
    Preview,
    GeneralSettings,
    Theme,
    Language,
    MapSettings,
    DefaultZoom,
    CacheSize,
    ClearCache,
    Reset,
    SupportTitle,
    FinancialSupport,
    FinancialSupportBody,
    DonateNow,
    TechnicalSupport,
    TechnicalSupportBody,
    Contribute,
    Share,
    ShareBody,
}

impl Label {
    #[cfg(test)]
    pub(crate) const ALL: [Label; 30] = [
        Label::Home,
        Label::Layers,
        Label::Settings,
        Label::Support,
        Label::LayersStore,
        Label::LayersStoreHint,
        Label::AvailableLayers,
        Label::Welcome,
        Label::WelcomeBody,
        Label::Pin,
        Label::Unpin,
        Label::LayerDetailsBody,
        Label::Preview,
        Label::GeneralSettings,
        Label::Theme,
        Label::Language,
        Label::MapSettings,
        Label::DefaultZoom,
        Label::CacheSize,
        Label::ClearCache,
        Label::Reset,
        Label::SupportTitle,
        Label::FinancialSupport,
        Label::FinancialSupportBody,
        Label::DonateNow,
        Label::TechnicalSupport,
        Label::TechnicalSupportBody,
        Label::Contribute,
        Label::Share,
        Label::ShareBody,
    ];
}

/// Look up the text of `label` in `language`.
pub(crate) fn text(language: Language, label: Label) -> &'static str {
    match language {
        Language::English => english(label),
        Language::Arabic => arabic(label),
    }
}

/// Heading of the details panel for the layer called `name`.
pub(crate) fn layer_heading(language: Language, name: &str) -> String {
    match language {
        Language::English => format!("{name} Layer"),
        Language::Arabic => format!("طبقة {name}"),
    }
}

fn english(label: Label) -> &'static str {
    match label {
        Label::Home => "Home",
        Label::Layers => "Layers",
        Label::Settings => "Settings",
        Label::Support => "Support Us",
        Label::LayersStore => "Layers Store",
        Label::LayersStoreHint => "Select a layer to see its details.",
        Label::AvailableLayers => "Available Layers",
        Label::Welcome => "Welcome to ZeroMeta",
        Label::WelcomeBody => "Select layers from the sidebar to get started.",
        Label::Pin => "Pin",
        Label::Unpin => "Unpin",
        Label::LayerDetailsBody => {
            "Layer details and configuration options will appear here."
        },
        Label::Preview => "Preview",
        Label::GeneralSettings => "General Settings",
        Label::Theme => "Theme",
        Label::Language => "Language",
        Label::MapSettings => "Map Settings",
        Label::DefaultZoom => "Default Zoom Level",
        Label::CacheSize => "Cache Size",
        Label::ClearCache => "Clear Cache",
        Label::Reset => "Reset",
        Label::SupportTitle => "Support the Project",
        Label::FinancialSupport => "Financial Support",
        Label::FinancialSupportBody => {
            "Help us keep development and improvements going"
        },
        Label::DonateNow => "Donate Now",
        Label::TechnicalSupport => "Technical Support",
        Label::TechnicalSupportBody => "Contribute to the source code",
        Label::Contribute => "Contribute",
        Label::Share => "Share",
        Label::ShareBody => "Spread the app among your friends",
    }
}

fn arabic(label: Label) -> &'static str {
    match label {
        Label::Home => "الرئيسية",
        Label::Layers => "الطبقات",
        Label::Settings => "الإعدادات",
        Label::Support => "ادعمنا",
        Label::LayersStore => "متجر الطبقات",
        Label::LayersStoreHint => "اختر طبقة لعرض تفاصيلها.",
        Label::AvailableLayers => "الطبقات المتاحة",
        Label::Welcome => "مرحباً بك في ZeroMeta",
        Label::WelcomeBody => "اختر الطبقات من الشريط الجانبي للبدء.",
        Label::Pin => "تثبيت",
        Label::Unpin => "إلغاء التثبيت",
        Label::LayerDetailsBody => "ستظهر هنا تفاصيل الطبقة وخيارات الإعداد.",
        Label::Preview => "معاينة",
        Label::GeneralSettings => "الإعدادات العامة",
        Label::Theme => "المظهر",
        Label::Language => "اللغة",
        Label::MapSettings => "إعدادات الخريطة",
        Label::DefaultZoom => "مستوى التكبير الافتراضي",
        Label::CacheSize => "حجم ذاكرة التخزين المؤقت",
        Label::ClearCache => "مسح ذاكرة التخزين المؤقت",
        Label::Reset => "إعادة تعيين",
        Label::SupportTitle => "دعم المشروع",
        Label::FinancialSupport => "دعم مادي",
        Label::FinancialSupportBody => "ساعدنا في استمرارية التطوير والتحسين",
        Label::DonateNow => "تبرع الآن",
        Label::TechnicalSupport => "دعم فني",
        Label::TechnicalSupportBody => "ساهم في تطوير الكود المصدري",
        Label::Contribute => "المساهمة",
        Label::Share => "مشاركة",
        Label::ShareBody => "انشر التطبيق بين أصدقائك",
    }
}
