//! Bilingual content tables
//!
//! Result texts are looked up by `(Verdict, Language)` and returned as a
//! structured [`ResultContent`]; screen strings are keyed by [`Text`]. Nothing
//! here has side effects, so the presenter is a pure projection of the
//! diagnosis and the language.

use drcrop_core::{DiagnosisResult, Language, Verdict};

// ─────────────────────────────────────────────────────────────────────────────
// Result content
// ─────────────────────────────────────────────────────────────────────────────

/// Status headline, description and recommendation list for one verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultContent {
    pub status: &'static str,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
}

static HEALTHY_EN: ResultContent = ResultContent {
    status: "🌱 Healthy Crop Detected!",
    description: "Excellent news! Your crop appears to be in perfect health with no signs of disease detected by our AI analysis.",
    recommendations: &[
        "Continue your current excellent care routine",
        "Monitor for any changes in leaf color or texture",
        "Maintain proper soil nutrition and pH levels",
        "Keep the growing area clean and free from weeds",
        "Ensure adequate but not excessive watering",
    ],
};

static HEALTHY_HI: ResultContent = ResultContent {
    status: "🌱 स्वस्थ फसल का पता चला!",
    description: "बहुत अच्छी खबर! आपकी फसल बिल्कुल स्वस्थ दिखाई दे रही है और हमारे AI विश्लेषण में कोई बीमारी के लक्षण नहीं मिले हैं।",
    recommendations: &[
        "अपनी वर्तमान उत्कृष्ट देखभाल की दिनचर्या जारी रखें",
        "पत्तियों के रंग या बनावट में किसी भी बदलाव पर नज़र रखें",
        "मिट्टी का उचित पोषण और pH स्तर बनाए रखें",
        "बढ़ते क्षेत्र को साफ और खरपतवार से मुक्त रखें",
        "पर्याप्त लेकिन अत्यधिक नहीं, पानी देना सुनिश्चित करें",
    ],
};

static DISEASED_EN: ResultContent = ResultContent {
    status: "⚠️ Disease Symptoms Detected",
    description: "Our advanced AI analysis has identified potential disease symptoms in your crop. Early detection allows for prompt treatment.",
    recommendations: &[
        "Consult with a local agricultural expert immediately",
        "Consider applying organic or recommended fungicide treatment",
        "Improve air circulation around affected plants",
        "Remove and dispose of severely affected leaves properly",
        "Monitor other plants in the area for similar symptoms",
        "Adjust watering schedule to prevent moisture buildup",
    ],
};

static DISEASED_HI: ResultContent = ResultContent {
    status: "⚠️ बीमारी के लक्षण मिले",
    description: "हमारे उन्नत AI विश्लेषण ने आपकी फसल में संभावित बीमारी के लक्षण पाए हैं। जल्दी पहचान से तुरंत इलाज संभव है।",
    recommendations: &[
        "तुरंत स्थानीय कृषि विशेषज्ञ से सलाह लें",
        "जैविक या सुझाए गए कवकनाशी उपचार पर विचार करें",
        "प्रभावित पौधों के चारों ओर हवा का संचार बेहतर बनाएं",
        "गंभीर रूप से प्रभावित पत्तियों को सही तरीके से हटाएं और नष्ट करें",
        "क्षेत्र के अन्य पौधों में समान लक्षणों की निगरानी करें",
        "नमी के संचय को रोकने के लिए पानी देने का कार्यक्रम समायोजित करें",
    ],
};

/// Content block for a verdict in a language
pub fn result_content(verdict: Verdict, language: Language) -> &'static ResultContent {
    match (verdict, language) {
        (Verdict::Healthy, Language::En) => &HEALTHY_EN,
        (Verdict::Healthy, Language::Hi) => &HEALTHY_HI,
        (Verdict::Diseased, Language::En) => &DISEASED_EN,
        (Verdict::Diseased, Language::Hi) => &DISEASED_HI,
    }
}

/// Pest risk label shown in the detail tiles
pub fn pest_risk(verdict: Verdict, language: Language) -> &'static str {
    match verdict {
        Verdict::Healthy => language.pick("Low", "कम"),
        Verdict::Diseased => language.pick("Medium", "मध्यम"),
    }
}

/// `"93% Confidence"` / `"93% विश्वास"`
pub fn confidence_badge(confidence: u8, language: Language) -> String {
    format!("{}% {}", confidence, language.pick("Confidence", "विश्वास"))
}

/// One cell of the "Detailed Analysis" grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTile {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// Light, moisture, pest risk and health score tiles
pub fn detail_tiles(result: &DiagnosisResult, language: Language) -> [DetailTile; 4] {
    [
        DetailTile {
            icon: "☀️",
            label: Text::LightExposure.get(language),
            value: Text::Optimal.get(language).to_string(),
        },
        DetailTile {
            icon: "💧",
            label: Text::MoistureLevel.get(language),
            value: Text::Good.get(language).to_string(),
        },
        DetailTile {
            icon: "🐛",
            label: Text::PestRisk.get(language),
            value: pest_risk(result.verdict(), language).to_string(),
        },
        DetailTile {
            icon: "❤️",
            label: Text::HealthScore.get(language),
            value: format!("{}%", result.confidence),
        },
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature cards
// ─────────────────────────────────────────────────────────────────────────────

/// Marketing card shown on the dashboard
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: &'static str,
    title: (&'static str, &'static str),
    description: (&'static str, &'static str),
}

impl Feature {
    pub fn title(&self, language: Language) -> &'static str {
        language.pick(self.title.0, self.title.1)
    }

    pub fn description(&self, language: Language) -> &'static str {
        language.pick(self.description.0, self.description.1)
    }
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🧠",
        title: ("AI-Powered Detection", "AI संचालित पहचान"),
        description: ("Advanced machine learning algorithms", "उन्नत मशीन लर्निंग एल्गॉरिदम"),
    },
    Feature {
        icon: "🎯",
        title: ("99% Accuracy", "99% सटीकता"),
        description: ("Highly accurate disease identification", "अत्यधिक सटीक रोग पहचान"),
    },
    Feature {
        icon: "⚡",
        title: ("Instant Results", "तत्काल परिणाम"),
        description: ("Get results in seconds", "सेकंडों में परिणाम पाएं"),
    },
    Feature {
        icon: "🛡️",
        title: ("Expert Validated", "विशेषज्ञ सत्यापित"),
        description: ("Verified by agricultural experts", "कृषि विशेषज्ञों द्वारा सत्यापित"),
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Screen strings
// ─────────────────────────────────────────────────────────────────────────────

/// Keys for every fixed string shown on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    // Entry
    AppName,
    Tagline,
    TaglineHindi,
    ChooseLanguage,
    Continue,

    // Dashboard
    DashboardTitle,
    DashboardSubtitle,
    SelectCrop,
    AutoDetect,
    UploadTitle,
    UploadText,
    UploadArea,
    BrowseFiles,
    ChangeImage,
    Analyze,
    SelectCropFirst,
    UploadImageFirst,
    OnlyImages,
    Features,

    // Results
    LoadingTitle,
    LoadingBody,
    ResultsTitle,
    ResultsSubtitle,
    AnalyzedImage,
    AiAnalyzed,
    DetailedAnalysis,
    LightExposure,
    Optimal,
    MoistureLevel,
    Good,
    PestRisk,
    HealthScore,
    ExpertRecommendations,
    BackToDashboard,
    AnalyzeAnother,
    SaveReport,
    AnalysisFailed,
    CropLabel,

    // Auth (English only)
    LogIn,
    SignUp,
    Email,
    Password,
    ToSignup,
    ToLogin,
    LoginSuccess,
    SignupSuccess,
    FieldsRequired,
}

impl Text {
    pub fn get(self, language: Language) -> &'static str {
        let pick = |en: &'static str, hi: &'static str| language.pick(en, hi);
        match self {
            Text::AppName => "Dr. Crop",
            Text::Tagline => "AI-Powered Crop Disease Detection",
            Text::TaglineHindi => "कृत्रिम बुद्धिमत्ता से फसल रोग की पहचान",
            Text::ChooseLanguage => "Choose Language / भाषा चुनें",
            Text::Continue => pick("Continue", "जारी रखें"),

            Text::DashboardTitle => pick("Dr. Crop Dashboard", "डॉ. क्रॉप डैशबोर्ड"),
            Text::DashboardSubtitle => pick(
                "Upload your crop image for instant AI-powered disease analysis",
                "तुरंत AI-संचालित रोग विश्लेषण के लिए अपनी फसल की तस्वीर अपलोड करें",
            ),
            Text::SelectCrop => pick("Select Your Crop", "अपनी फसल चुनें"),
            Text::AutoDetect => pick("🤖 Auto-detect crop type", "🤖 फसल का प्रकार स्वतः पहचानें"),
            Text::UploadTitle => pick("Upload Crop Image", "फसल की तस्वीर अपलोड करें"),
            Text::UploadText => pick(
                "Drag and drop your crop image here",
                "अपनी फसल की तस्वीर यहाँ खींचें और छोड़ें",
            ),
            Text::UploadArea => pick(
                "Drop your image here or type its path below",
                "अपनी तस्वीर यहाँ छोड़ें या नीचे उसका पथ लिखें",
            ),
            Text::BrowseFiles => pick("📁 Browse Files", "📁 फाइलें ब्राउज़ करें"),
            Text::ChangeImage => pick("Change Image", "तस्वीर बदलें"),
            Text::Analyze => pick("🔍 Analyze My Crop", "🔍 मेरी फसल का विश्लेषण करें"),
            Text::SelectCropFirst => pick(
                "Please select a crop type first",
                "कृपया पहले फसल का प्रकार चुनें",
            ),
            Text::UploadImageFirst => pick(
                "Please upload a crop image first",
                "कृपया पहले फसल की तस्वीर अपलोड करें",
            ),
            Text::OnlyImages => pick(
                "Only image files are supported",
                "केवल तस्वीर फ़ाइलें समर्थित हैं",
            ),
            Text::Features => pick("Why Choose Dr. Crop?", "डॉ. क्रॉप क्यों चुनें?"),

            Text::LoadingTitle => pick("🔬 AI Analysis in Progress...", "🔬 AI विश्लेषण प्रगति में..."),
            Text::LoadingBody => pick(
                "Our advanced AI is carefully examining your crop image for disease detection...",
                "हमारा उन्नत AI आपकी फसल की तस्वीर में बीमारी की सावधानीपूर्वक जांच कर रहा है...",
            ),
            Text::ResultsTitle => pick("🔬 Analysis Results", "🔬 विश्लेषण परिणाम"),
            Text::ResultsSubtitle => pick(
                "AI-Powered Crop Disease Detection",
                "AI-संचालित फसल रोग पहचान",
            ),
            Text::AnalyzedImage => pick("Analyzed Image", "विश्लेषित तस्वीर"),
            Text::AiAnalyzed => pick("AI Analyzed", "AI विश्लेषित"),
            Text::DetailedAnalysis => pick("Detailed Analysis", "विस्तृत विश्लेषण"),
            Text::LightExposure => pick("Light Exposure", "प्रकाश"),
            Text::Optimal => pick("Optimal", "उत्तम"),
            Text::MoistureLevel => pick("Moisture Level", "नमी स्तर"),
            Text::Good => pick("Good", "अच्छा"),
            Text::PestRisk => pick("Pest Risk", "कीट जोखिम"),
            Text::HealthScore => pick("Health Score", "स्वास्थ्य स्कोर"),
            Text::ExpertRecommendations => pick("Expert Recommendations", "विशेषज्ञ सुझाव"),
            Text::BackToDashboard => pick("Back to Dashboard", "डैशबोर्ड पर वापस"),
            Text::AnalyzeAnother => pick("Analyze Another Crop", "दूसरी फसल का विश्लेषण करें"),
            Text::SaveReport => pick("Save Report", "रिपोर्ट सेव करें"),
            Text::AnalysisFailed => pick("Analysis failed", "विश्लेषण विफल रहा"),
            Text::CropLabel => pick("Crop", "फसल"),

            Text::LogIn => "Log In",
            Text::SignUp => "Sign Up",
            Text::Email => "Email",
            Text::Password => "Password",
            Text::ToSignup => "Don't have an account? Sign Up",
            Text::ToLogin => "Already have an account? Log In",
            Text::LoginSuccess => "Login successful! (Demo only)",
            Text::SignupSuccess => "Signup successful! (Demo only)",
            Text::FieldsRequired => "Email and password are required",
        }
    }
}
