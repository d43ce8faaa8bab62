//! Localized UI text bundles
//!
//! One static bundle per display language. Labels, task texts, status
//! messages and error messages all come from here so the backend and the
//! browser client show the same wording.

use serde::Serialize;

use crate::types::Language;

/// All user-facing text for one display language
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBundle {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub location: &'static str,
    pub pincode: &'static str,
    pub pincode_placeholder: &'static str,
    pub auto_fill: &'static str,
    pub country: &'static str,
    pub state: &'static str,
    pub district: &'static str,
    pub taluka: &'static str,
    pub village: &'static str,
    pub select_task: &'static str,
    pub analyze_btn: &'static str,
    pub analyzing: &'static str,
    pub enter_name: &'static str,
    pub guide_title: &'static str,
    pub distance: &'static str,
    pub ground_prep: &'static str,
    pub hole_prep: &'static str,
    pub care: &'static str,
    pub fertilizers: &'static str,
    pub organic: &'static str,
    pub chemical: &'static str,
    pub tasks: TaskTexts,
    pub status: StatusTexts,
    pub errors: ErrorTexts,
}

/// Labels and one-line descriptions for the six analysis tasks
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTexts {
    pub history: &'static str,
    pub prediction: &'static str,
    pub crop_rec: &'static str,
    pub fruit_rec: &'static str,
    pub crop_check: &'static str,
    pub fruit_check: &'static str,
    pub desc_history: &'static str,
    pub desc_prediction: &'static str,
    pub desc_crop_rec: &'static str,
    pub desc_fruit_rec: &'static str,
    pub desc_crop_check: &'static str,
    pub desc_fruit_check: &'static str,
}

/// PIN lookup status messages
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusTexts {
    pub searching: &'static str,
    pub found: &'static str,
    pub not_found: &'static str,
    pub manual_entry: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorTexts {
    pub location_required: &'static str,
    pub invalid_pincode: &'static str,
    pub analysis_failed: &'static str,
    pub incomplete_pincode: &'static str,
}

/// Text bundle for a language
pub fn texts(language: Language) -> &'static TextBundle {
    match language {
        Language::English => &ENGLISH,
        Language::Hindi => &HINDI,
        Language::Marathi => &MARATHI,
        Language::Gujarati => &GUJARATI,
        Language::Bengali => &BENGALI,
    }
}

static ENGLISH: TextBundle = TextBundle {
    title: "AgriSense AI",
    subtitle: "Smart Climate & Crop Intelligence",
    location: "Location Details",
    pincode: "PINCODE",
    pincode_placeholder: "e.g. 412207",
    auto_fill: "Enter PIN to auto-fill details",
    country: "Country",
    state: "State",
    district: "District",
    taluka: "Taluka",
    village: "Town/Village",
    select_task: "Select Intelligence Task",
    analyze_btn: "Generate Analysis",
    analyzing: "Analyzing Data...",
    enter_name: "Enter Name",
    guide_title: "Cultivation Master Guide",
    distance: "Plantation Distance",
    ground_prep: "Ground Preparation",
    hole_prep: "Hole Prep & Basal Dose",
    care: "Care (First 6-8 Months)",
    fertilizers: "Fertilizer Schedule",
    organic: "Organic",
    chemical: "Chemical",
    tasks: TaskTexts {
        history: "Weather History (10y)",
        prediction: "Future Forecast",
        crop_rec: "Best Crops",
        fruit_rec: "Best Fruits",
        crop_check: "Check Crop Suitability",
        fruit_check: "Check Fruit Suitability",
        desc_history: "Past trends & rainfall analysis",
        desc_prediction: "12-month predictive climate model",
        desc_crop_rec: "Recommended crops for your soil & PINCODE",
        desc_fruit_rec: "Orchard planning & fruit suitability",
        desc_crop_check: "Can I grow this crop here?",
        desc_fruit_check: "Can I plant this fruit tree?",
    },
    status: StatusTexts {
        searching: "Fetching location details...",
        found: "Location found!",
        not_found: "Details not found.",
        manual_entry: "Manual entry required.",
    },
    errors: ErrorTexts {
        location_required: "Please enter at least Country and PINCODE.",
        invalid_pincode: "PINCODE must contain digits only, at most 6.",
        analysis_failed: "Failed to generate analysis. Please check your connection or try again.",
        incomplete_pincode: "Enter all 6 digits of the PINCODE to auto-fill.",
    },
};

static MARATHI: TextBundle = TextBundle {
    title: "ॲग्रीसेन्स एआय",
    subtitle: "स्मार्ट हवामान आणि पीक सल्लागार",
    location: "स्थान तपशील",
    pincode: "पिनकोड",
    pincode_placeholder: "उदा. 412207",
    auto_fill: "माहिती भरण्यासाठी पिन टाका",
    country: "देश",
    state: "राज्य",
    district: "जिल्हा",
    taluka: "तालुका",
    village: "गाव/शहर",
    select_task: "माहिती कार्य निवडा",
    analyze_btn: "विश्लेषण करा",
    analyzing: "विश्लेषण करत आहे...",
    enter_name: "नाव टाका",
    guide_title: "लागवड मार्गदर्शक",
    distance: "लागवड अंतर",
    ground_prep: "जमीन तयारी",
    hole_prep: "खड्डा तयारी आणि खते",
    care: "निगा (पहिले ६-८ महिने)",
    fertilizers: "खत व्यवस्थापन",
    organic: "सेंद्रिय",
    chemical: "रासायनिक",
    tasks: TaskTexts {
        history: "हवामान इतिहास (१० वर्ष)",
        prediction: "भविष्यातील अंदाज",
        crop_rec: "उत्तम पिके",
        fruit_rec: "उत्तम फळझाडे",
        crop_check: "पीक योग्यता तपासा",
        fruit_check: "फळझाड योग्यता तपासा",
        desc_history: "मागील ट्रेंड आणि पावसाचे विश्लेषण",
        desc_prediction: "१२ महिन्यांचे अंदाजित हवामान प्रारूप",
        desc_crop_rec: "तुमच्या जमिनीसाठी आणि पिनकोडसाठी शिफारस",
        desc_fruit_rec: "फळबागांचे नियोजन आणि योग्यता",
        desc_crop_check: "मी हे पीक येथे घेऊ शकतो का?",
        desc_fruit_check: "मी हे फळझाड लावू शकतो का?",
    },
    status: StatusTexts {
        searching: "स्थान तपशील मिळवत आहे...",
        found: "स्थान सापडले!",
        not_found: "तपशील सापडले नाहीत.",
        manual_entry: "कृपया माहिती स्वतः भरा.",
    },
    errors: ErrorTexts {
        location_required: "कृपया किमान देश आणि पिनकोड टाका.",
        invalid_pincode: "पिनकोडमध्ये फक्त अंक असावेत, जास्तीत जास्त 6.",
        analysis_failed: "विश्लेषण तयार करता आले नाही. कृपया आपले कनेक्शन तपासा किंवा पुन्हा प्रयत्न करा.",
        incomplete_pincode: "स्वयं-भरण्यासाठी पिनकोडचे सर्व 6 अंक टाका.",
    },
};

static HINDI: TextBundle = TextBundle {
    title: "एग्रीसेंस एआई",
    subtitle: "स्मार्ट मौसम और फसल सलाहकार",
    location: "स्थान विवरण",
    pincode: "पिनकोड",
    pincode_placeholder: "उदा. 412207",
    auto_fill: "विवरण भरने के लिए पिन दर्ज करें",
    country: "देश",
    state: "राज्य",
    district: "जिला",
    taluka: "तालुका",
    village: "गाँव/शहर",
    select_task: "कार्य चुनें",
    analyze_btn: "विश्लेषण करें",
    analyzing: "विश्लेषण हो रहा है...",
    enter_name: "नाम दर्ज करें",
    guide_title: "खेती मार्गदर्शिका",
    distance: "रोपण दूरी",
    ground_prep: "भूमि की तैयारी",
    hole_prep: "गड्ढा तैयारी और खाद",
    care: "देखभाल (पहले 6-8 महीने)",
    fertilizers: "खाद अनुसूची",
    organic: "जैविक",
    chemical: "रासायनिक",
    tasks: TaskTexts {
        history: "मौसम इतिहास (10 वर्ष)",
        prediction: "भविष्य का पूर्वानुमान",
        crop_rec: "सर्वोत्तम फसलें",
        fruit_rec: "सर्वोत्तम फल",
        crop_check: "फसल उपयुक्तता की जाँच करें",
        fruit_check: "फल उपयुक्तता की जाँच करें",
        desc_history: "पिछले रुझान और वर्षा विश्लेषण",
        desc_prediction: "12 महीने का पूर्वानुमानित जलवायु मॉडल",
        desc_crop_rec: "आपकी मिट्टी और पिनकोड के लिए अनुशंसित",
        desc_fruit_rec: "बागवानी योजना और फल उपयुक्तता",
        desc_crop_check: "क्या मैं यहाँ यह फसल उगा सकता हूँ?",
        desc_fruit_check: "क्या मैं यह फलदार वृक्ष लगा सकता हूँ?",
    },
    status: StatusTexts {
        searching: "स्थान विवरण प्राप्त हो रहा है...",
        found: "स्थान मिल गया!",
        not_found: "विवरण नहीं मिला।",
        manual_entry: "कृपया विवरण स्वयं भरें।",
    },
    errors: ErrorTexts {
        location_required: "कृपया कम से कम देश और पिनकोड दर्ज करें।",
        invalid_pincode: "पिनकोड में केवल अंक हों, अधिकतम 6।",
        analysis_failed: "विश्लेषण तैयार नहीं हो सका। कृपया अपना कनेक्शन जांचें या पुनः प्रयास करें।",
        incomplete_pincode: "स्वतः भरने के लिए पिनकोड के सभी 6 अंक दर्ज करें।",
    },
};

static GUJARATI: TextBundle = TextBundle {
    title: "એગ્રીસેન્સ એઆઈ",
    subtitle: "સ્માર્ટ હવામાન અને પાક સલાહકાર",
    location: "સ્થાન વિગતો",
    pincode: "પિનકોડ",
    pincode_placeholder: "દા.ત. 412207",
    auto_fill: "વિગતો ભરવા માટે પિન દાખલ કરો",
    country: "દેશ",
    state: "રાજ્ય",
    district: "જિલ્લો",
    taluka: "તાલુકા",
    village: "ગામ/શહેર",
    select_task: "કાર્ય પસંદ કરો",
    analyze_btn: "વિશ્લેષણ કરો",
    analyzing: "વિશ્લેષણ થઈ રહ્યું છે...",
    enter_name: "નામ દાખલ કરો",
    guide_title: "ખેતી માર્ગદર્શિકા",
    distance: "વાવેતર અંતર",
    ground_prep: "જમીન તૈયારી",
    hole_prep: "ખાડા તૈયારી અને ખાતર",
    care: "સંભાળ (પ્રથમ 6-8 મહિના)",
    fertilizers: "ખાતર સમયપત્રક",
    organic: "જૈવિક",
    chemical: "રાસાયણિક",
    tasks: TaskTexts {
        history: "હવામાન ઇતિહાસ (10 વર્ષ)",
        prediction: "ભવિષ્યની આગાહી",
        crop_rec: "શ્રેષ્ઠ પાક",
        fruit_rec: "શ્રેષ્ઠ ફળો",
        crop_check: "પાક યોગ્યતા તપાસો",
        fruit_check: "ફળ યોગ્યતા તપાસો",
        desc_history: "ભૂતકાળના વલણો અને વરસાદનું વિશ્લેષણ",
        desc_prediction: "12 મહિનાની આગાહી",
        desc_crop_rec: "તમારી જમીન અને પિનકોડ માટે ભલામણ કરેલ",
        desc_fruit_rec: "બાગાયત આયોજન અને ફળ યોગ્યતા",
        desc_crop_check: "શું હું અહીં આ પાક ઉગાડી શકું?",
        desc_fruit_check: "શું હું આ ફળનું વૃક્ષ વાવી શકું?",
    },
    status: StatusTexts {
        searching: "સ્થાન વિગતો મેળવી રહ્યા છીએ...",
        found: "સ્થાન મળ્યું!",
        not_found: "વિગતો મળી નથી.",
        manual_entry: "કૃપા કરીને વિગતો જાતે દાખલ કરો.",
    },
    errors: ErrorTexts {
        location_required: "કૃપા કરીને ઓછામાં ઓછું દેશ અને પિનકોડ દાખલ કરો.",
        invalid_pincode: "પિનકોડમાં ફક્ત અંક હોવા જોઈએ, વધુમાં વધુ 6.",
        analysis_failed: "વિશ્લેષણ બનાવી શકાયું નહીં. કૃપા કરીને તમારું કનેક્શન તપાસો અથવા ફરી પ્રયાસ કરો.",
        incomplete_pincode: "આપમેળે ભરવા માટે પિનકોડના બધા 6 અંક દાખલ કરો.",
    },
};

static BENGALI: TextBundle = TextBundle {
    title: "এগ্রিসেন্স এআই",
    subtitle: "স্মার্ট আবহাওয়া এবং শস্য উপদেষ্টা",
    location: "অবস্থানের বিবরণ",
    pincode: "পিনকোড",
    pincode_placeholder: "যেমন 412207",
    auto_fill: "বিস্তারিত পূরণ করতে পিন লিখুন",
    country: "দেশ",
    state: "রাজ্য",
    district: "জেলা",
    taluka: "তালুক",
    village: "গ্রাম/শহর",
    select_task: "কাজ নির্বাচন করুন",
    analyze_btn: "বিশ্লেষণ করুন",
    analyzing: "বিশ্লেষণ করা হচ্ছে...",
    enter_name: "নাম লিখুন",
    guide_title: "চাষাবাদ নির্দেশিকা",
    distance: "রোপণ দূরত্ব",
    ground_prep: "জমি তৈরি",
    hole_prep: "গর্ত তৈরি ও সার প্রয়োগ",
    care: "যত্ন (প্রথম ৬-৮ মাস)",
    fertilizers: "সারের সময়সূচী",
    organic: "জৈব",
    chemical: "রাসায়নিক",
    tasks: TaskTexts {
        history: "আবহাওয়ার ইতিহাস (১০ বছর)",
        prediction: "ভবিষ্যতের পূর্বাভাস",
        crop_rec: "সেরা ফসল",
        fruit_rec: "সেরা ফল",
        crop_check: "ফসলের উপযুক্ততা পরীক্ষা করুন",
        fruit_check: "ফলের উপযুক্ততা পরীক্ষা করুন",
        desc_history: "অতীতের প্রবণতা এবং বৃষ্টিপাত বিশ্লেষণ",
        desc_prediction: "১২ মাসের পূর্বাভাস",
        desc_crop_rec: "আপনার মাটি এবং পিনকোডের জন্য সুপারিশকৃত",
        desc_fruit_rec: "বাগান পরিকল্পনা এবং ফলের উপযুক্ততা",
        desc_crop_check: "আমি কি এখানে এই ফসল ফলাতে পারি?",
        desc_fruit_check: "আমি কি এই ফলের গাছ লাগাতে পারি?",
    },
    status: StatusTexts {
        searching: "অবস্থানের বিবরণ আনা হচ্ছে...",
        found: "অবস্থান পাওয়া গেছে!",
        not_found: "বিবরণ পাওয়া যায়নি।",
        manual_entry: "অনুগ্রহ করে বিবরণ নিজে লিখুন।",
    },
    errors: ErrorTexts {
        location_required: "অনুগ্রহ করে অন্তত দেশ এবং পিনকোড লিখুন।",
        invalid_pincode: "পিনকোডে শুধু সংখ্যা থাকবে, সর্বোচ্চ ৬টি।",
        analysis_failed: "বিশ্লেষণ তৈরি করা যায়নি। অনুগ্রহ করে আপনার সংযোগ পরীক্ষা করুন বা আবার চেষ্টা করুন।",
        incomplete_pincode: "স্বয়ংক্রিয়ভাবে পূরণের জন্য পিনকোডের সব ৬টি সংখ্যা লিখুন।",
    },
};
