//! 内置特征表
//! 不可变静态记录，进程内首次使用时编译一次，之后只读共享

use super::model::SignatureRecord;

const NONE: &[&str] = &[];

/// 内置技术特征表
pub static EMBEDDED_SIGNATURES: &[SignatureRecord] = &[
    // ---------------- JavaScript Frameworks ----------------
    SignatureRecord {
        name: "React",
        category: "JavaScript Frameworks",
        icon: Some("React.svg"),
        website: Some("https://react.dev"),
        confidence: Some(90.0),
        html: &["data-reactroot", "data-reactid", "react-root", "React\\.createElement"],
        scripts: &[
            "/react(?:-dom)?(?:\\.[a-z]+)*\\.js",
            "react(?:-dom)?@(\\d+(?:\\.\\d+)*);version:\\1",
        ],
        js: &["window\\.__REACT", "__REACT_DEVTOOLS", "window\\.React\\b"],
        headers: NONE,
        dom: &["data-reactroot", "data-react-app"],
    },
    SignatureRecord {
        name: "Vue.js",
        category: "JavaScript Frameworks",
        icon: Some("Vue.js.svg"),
        website: Some("https://vuejs.org"),
        confidence: Some(90.0),
        html: &["data-v-", "v-app", "v-bind:", "v-model"],
        scripts: &["/vue(?:\\.[a-z]+)*\\.js", "vue@(\\d+(?:\\.\\d+)*);version:\\1"],
        js: &["window\\.__VUE__", "window\\.Vue\\b", "window\\.__VUE_DEVTOOLS"],
        headers: NONE,
        dom: &["\\[data-v-[0-9a-f]+", "\\[data-v-app"],
    },
    SignatureRecord {
        name: "Angular",
        category: "JavaScript Frameworks",
        icon: Some("Angular.svg"),
        website: Some("https://angular.dev"),
        confidence: Some(90.0),
        html: &["ng-app", "ng-model", "ng-bind", "data-ng-", "ng-version=\"(\\d+(?:\\.\\d+)*)\";version:\\1"],
        scripts: &["/angular(?:[.-][a-z0-9]+)*\\.js"],
        js: &["window\\.angular\\b", "window\\.ng\\b"],
        headers: NONE,
        dom: &["\\[ng-version", "\\[ng-app"],
    },
    SignatureRecord {
        name: "Backbone.js",
        category: "JavaScript Frameworks",
        icon: Some("Backbone.js.svg"),
        website: Some("https://backbonejs.org"),
        confidence: Some(80.0),
        html: &["backbone"],
        scripts: &["backbone(?:[.-]min)?\\.js"],
        js: &["window\\.Backbone\\b"],
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "React Router",
        category: "JavaScript Frameworks",
        icon: Some("React Router.svg"),
        website: Some("https://reactrouter.com"),
        confidence: Some(85.0),
        html: &["react-router"],
        scripts: &["react-router"],
        js: NONE,
        headers: NONE,
        dom: NONE,
    },
    // ---------------- JavaScript Libraries ----------------
    SignatureRecord {
        name: "jQuery",
        category: "JavaScript Libraries",
        icon: Some("jQuery.svg"),
        website: Some("https://jquery.com"),
        confidence: Some(95.0),
        html: &["jquery"],
        scripts: &[
            "jquery(?:-(\\d+(?:\\.\\d+)*))?(?:\\.min)?\\.js;version:\\1",
            "code\\.jquery\\.com",
        ],
        js: &[
            "window\\.jQuery\\b",
            "window\\.\\$=",
            "jQuery\\.fn\\.jquery=(\\d+(?:\\.\\d+)*);version:\\1",
        ],
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "jQuery Migrate",
        category: "JavaScript Libraries",
        icon: Some("jQuery.svg"),
        website: Some("https://github.com/jquery/jquery-migrate"),
        confidence: Some(85.0),
        html: &["jqmigrate", "jquery-migrate"],
        scripts: &["jquery-migrate(?:-(\\d+(?:\\.\\d+)*))?(?:\\.min)?\\.js;version:\\1"],
        js: NONE,
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "Underscore.js",
        category: "JavaScript Libraries",
        icon: Some("Underscore.js.png"),
        website: Some("https://underscorejs.org"),
        confidence: Some(80.0),
        html: &["underscore\\.js", "underscore-min"],
        scripts: &["underscore(?:[.-]min)?\\.js"],
        js: NONE,
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "Swiper",
        category: "JavaScript Libraries",
        icon: Some("Swiper.svg"),
        website: Some("https://swiperjs.com"),
        confidence: Some(85.0),
        html: &["swiper-container", "swiper-wrapper", "swiper-slide"],
        scripts: &["swiper(?:-bundle)?(?:\\.min)?\\.js"],
        js: &["window\\.Swiper\\b"],
        headers: NONE,
        dom: &["\\.swiper-(?:container|wrapper)"],
    },
    SignatureRecord {
        name: "Framer Motion",
        category: "JavaScript Libraries",
        icon: Some("Framer Motion.svg"),
        website: Some("https://www.framer.com/motion/"),
        confidence: Some(80.0),
        html: &["framer-motion"],
        scripts: &["framer-motion"],
        js: NONE,
        headers: NONE,
        dom: NONE,
    },
    // ---------------- UI / CSS Frameworks ----------------
    SignatureRecord {
        name: "Bootstrap",
        category: "UI Frameworks",
        icon: Some("Bootstrap.svg"),
        website: Some("https://getbootstrap.com"),
        confidence: Some(85.0),
        html: &["bootstrap", "btn-primary", "container-fluid", "col-md-", "class=\"row\""],
        scripts: &[
            "/bootstrap(?:\\.bundle)?(?:\\.min)?\\.(?:js|css)",
            "bootstrap@(\\d+(?:\\.\\d+)*);version:\\1",
        ],
        js: &["window\\.bootstrap\\b"],
        headers: NONE,
        dom: &["\\.btn-primary", "\\.container-fluid", "\\.col-md-\\d+"],
    },
    SignatureRecord {
        name: "Tailwind CSS",
        category: "UI Frameworks",
        icon: Some("Tailwind CSS.svg"),
        website: Some("https://tailwindcss.com"),
        confidence: Some(85.0),
        html: &["tailwindcss", "tailwind"],
        scripts: &["cdn\\.tailwindcss\\.com", "tailwind(?:css)?(?:\\.min)?\\.(?:js|css)"],
        js: &["window\\.tailwind\\b"],
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "Radix UI",
        category: "UI Frameworks",
        icon: Some("Radix UI.svg"),
        website: Some("https://www.radix-ui.com"),
        confidence: Some(80.0),
        html: &["radix-ui", "data-radix-"],
        scripts: &["radix-ui"],
        js: NONE,
        headers: NONE,
        dom: &["\\[data-radix-"],
    },
    SignatureRecord {
        name: "shadcn/ui",
        category: "UI Frameworks",
        icon: Some("shadcn-ui.svg"),
        website: Some("https://ui.shadcn.com"),
        confidence: Some(75.0),
        html: &["shadcn"],
        scripts: &["shadcn"],
        js: NONE,
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "Lucide",
        category: "Font Scripts",
        icon: Some("Lucide.svg"),
        website: Some("https://lucide.dev"),
        confidence: Some(75.0),
        html: &["lucide-icon", "lucide"],
        scripts: &["lucide"],
        js: &["window\\.lucide\\b"],
        headers: NONE,
        dom: &["\\.lucide"],
    },
    // ---------------- CMS / Page Builders ----------------
    SignatureRecord {
        name: "WordPress",
        category: "CMS",
        icon: Some("WordPress.svg"),
        website: Some("https://wordpress.org"),
        confidence: Some(95.0),
        html: &[
            "wp-content",
            "wp-includes",
            "wp-json",
            "<meta name=\"generator\" content=\"WordPress ?(\\d+(?:\\.\\d+)*)?;version:\\1",
        ],
        scripts: &["/wp-content/", "/wp-includes/"],
        js: &["window\\.wp\\b", "window\\.wpApiSettings\\b"],
        headers: &["x-powered-by: WordPress", "wp-json"],
        dom: NONE,
    },
    SignatureRecord {
        name: "Elementor",
        category: "Page Builders",
        icon: Some("Elementor.svg"),
        website: Some("https://elementor.com"),
        confidence: Some(90.0),
        html: &["elementor-widget", "data-elementor", "elementor"],
        scripts: &["elementor(?:-pro)?/assets/.*\\.js", "elementor"],
        js: &["window\\.elementorFrontend\\b"],
        headers: NONE,
        dom: &["\\[data-elementor-type", "\\.elementor-widget"],
    },
    SignatureRecord {
        name: "Hello Elementor",
        category: "WordPress Themes",
        icon: Some("Elementor.svg"),
        website: Some("https://elementor.com/hello-theme/"),
        confidence: Some(75.0),
        html: &["hello-elementor", "Hello Elementor"],
        scripts: &["themes/hello-elementor/"],
        js: NONE,
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "Contact Form 7",
        category: "WordPress Plugins",
        icon: Some("Contact Form 7.svg"),
        website: Some("https://contactform7.com"),
        confidence: Some(85.0),
        html: &["wpcf7", "contact-form-7"],
        scripts: &["contact-form-7"],
        js: &["window\\.wpcf7\\b"],
        headers: NONE,
        dom: &["\\.wpcf7"],
    },
    SignatureRecord {
        name: "Lovable",
        category: "Page Builders",
        icon: Some("Lovable.svg"),
        website: Some("https://lovable.dev"),
        confidence: Some(80.0),
        html: &["lovable\\.dev", "lovable"],
        scripts: &["lovable"],
        js: NONE,
        headers: NONE,
        dom: NONE,
    },
    // ---------------- Ecommerce / Payment ----------------
    SignatureRecord {
        name: "WooCommerce",
        category: "Ecommerce",
        icon: Some("WooCommerce.svg"),
        website: Some("https://woocommerce.com"),
        confidence: Some(90.0),
        html: &["woocommerce", "woo-product", "wc-cart"],
        scripts: &["woocommerce"],
        js: &["window\\.wc_add_to_cart_params\\b", "window\\.woocommerce_params\\b"],
        headers: NONE,
        dom: &["\\.woocommerce"],
    },
    SignatureRecord {
        name: "Shopify",
        category: "Ecommerce",
        icon: Some("Shopify.svg"),
        website: Some("https://www.shopify.com"),
        confidence: Some(95.0),
        html: &["cdn\\.shopify\\.com", "myshopify\\.com", "Shopify\\.theme"],
        scripts: &["cdn\\.shopify\\.com"],
        js: &["window\\.Shopify\\b"],
        headers: &["x-shopid", "x-shopify-stage", "powered-by: Shopify"],
        dom: NONE,
    },
    SignatureRecord {
        name: "Stripe",
        category: "Payment Processors",
        icon: Some("Stripe.svg"),
        website: Some("https://stripe.com"),
        confidence: Some(85.0),
        html: &["js\\.stripe\\.com", "stripe\\.com"],
        scripts: &["js\\.stripe\\.com", "stripe\\.com"],
        js: &["window\\.Stripe\\b"],
        headers: NONE,
        dom: NONE,
    },
    // ---------------- Analytics / Tag Managers ----------------
    SignatureRecord {
        name: "Google Analytics",
        category: "Analytics",
        icon: Some("Google Analytics.svg"),
        website: Some("https://marketingplatform.google.com/about/analytics/"),
        confidence: Some(95.0),
        html: &["google-analytics", "gtag\\(", "ga\\('create'", "UA-\\d{4,10}-\\d{1,4}"],
        scripts: &[
            "google-analytics\\.com/(?:ga|analytics)\\.js",
            "googletagmanager\\.com/gtag/js",
        ],
        js: &["window\\.ga\\b", "window\\.gtag\\b", "window\\.gaData\\b"],
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "GA4",
        category: "Analytics",
        icon: Some("Google Analytics.svg"),
        website: Some("https://developers.google.com/analytics"),
        confidence: Some(85.0),
        html: &["gtag\\('config', ?'G-[A-Z0-9]+'", "measurement_id"],
        scripts: &["googletagmanager\\.com/gtag/js\\?id=G-"],
        js: NONE,
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "Facebook Pixel",
        category: "Analytics",
        icon: Some("Facebook.svg"),
        website: Some("https://www.facebook.com/business/tools/meta-pixel"),
        confidence: Some(90.0),
        html: &["fbq\\(", "connect\\.facebook\\.net", "facebook\\.com/tr"],
        scripts: &["connect\\.facebook\\.net/[a-z_]+/fbevents\\.js"],
        js: &["window\\.fbq\\b"],
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "Site Kit",
        category: "Analytics",
        icon: Some("Site Kit.svg"),
        website: Some("https://sitekit.withgoogle.com"),
        confidence: Some(85.0),
        html: &["googlesitekit", "site-kit"],
        scripts: &["googlesitekit"],
        js: NONE,
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "Mixpanel",
        category: "Analytics",
        icon: Some("Mixpanel.svg"),
        website: Some("https://mixpanel.com"),
        confidence: Some(85.0),
        html: &["mixpanel"],
        scripts: &["mixpanel"],
        js: &["window\\.mixpanel\\b"],
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "Tinybird",
        category: "Analytics",
        icon: Some("Tinybird.svg"),
        website: Some("https://www.tinybird.co"),
        confidence: Some(80.0),
        html: &["tinybird"],
        scripts: &["tinybird"],
        js: NONE,
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "Google Tag Manager",
        category: "Tag Managers",
        icon: Some("Google Tag Manager.svg"),
        website: Some("https://marketingplatform.google.com/about/tag-manager/"),
        confidence: Some(95.0),
        html: &["googletagmanager\\.com/gtm\\.js", "gtm\\.start", "googletagmanager"],
        scripts: &["googletagmanager\\.com/gtm\\.js"],
        js: &["window\\.google_tag_manager\\b", "window\\.dataLayer\\b"],
        headers: NONE,
        dom: NONE,
    },
    // ---------------- CDN / Hosting / Security ----------------
    SignatureRecord {
        name: "Cloudflare",
        category: "CDN",
        icon: Some("CloudFlare.svg"),
        website: Some("https://www.cloudflare.com"),
        confidence: Some(75.0),
        html: &["cloudflare", "cdnjs\\.cloudflare\\.com"],
        scripts: &["cloudflare"],
        js: NONE,
        headers: &["server: cloudflare", "cf-ray"],
        dom: NONE,
    },
    SignatureRecord {
        name: "Cloudflare Bot Management",
        category: "Security",
        icon: Some("CloudFlare.svg"),
        website: Some("https://www.cloudflare.com/application-services/products/bot-management/"),
        confidence: Some(70.0),
        html: &["__cf_bm", "bot-management"],
        scripts: &["challenges\\.cloudflare\\.com"],
        js: NONE,
        headers: &["__cf_bm"],
        dom: NONE,
    },
    SignatureRecord {
        name: "Cloudways",
        category: "Hosting",
        icon: Some("Cloudways.svg"),
        website: Some("https://www.cloudways.com"),
        confidence: Some(75.0),
        html: &["cloudways"],
        scripts: &["cloudways"],
        js: NONE,
        headers: &["cloudways"],
        dom: NONE,
    },
    SignatureRecord {
        name: "AWS",
        category: "Hosting",
        icon: Some("Amazon Web Services.svg"),
        website: Some("https://aws.amazon.com"),
        confidence: None,
        html: &["amazonaws\\.com", "cloudfront\\.net"],
        scripts: &["amazonaws\\.com", "cloudfront\\.net"],
        js: &["window\\.AWS\\b"],
        headers: &["server: AmazonS3", "server: CloudFront", "x-amz-cf-id"],
        dom: NONE,
    },
    SignatureRecord {
        name: "Google Cloud",
        category: "Hosting",
        icon: Some("Google Cloud.svg"),
        website: Some("https://cloud.google.com"),
        confidence: None,
        html: &["gstatic\\.com", "appspot\\.com", "firebase"],
        scripts: &["gstatic\\.com", "appspot\\.com"],
        js: &["window\\.firebase\\b"],
        headers: &["server: Google Frontend"],
        dom: NONE,
    },
    SignatureRecord {
        name: "HSTS",
        category: "Security",
        icon: Some("HSTS.svg"),
        website: Some("https://developer.mozilla.org/docs/Web/HTTP/Headers/Strict-Transport-Security"),
        confidence: Some(70.0),
        html: &["strict-transport-security"],
        scripts: NONE,
        js: NONE,
        headers: &["strict-transport-security"],
        dom: NONE,
    },
    SignatureRecord {
        name: "HTTP/3",
        category: "Miscellaneous",
        icon: Some("HTTP3.svg"),
        website: Some("https://httpwg.org/"),
        confidence: Some(60.0),
        html: &["http/3", "quic"],
        scripts: NONE,
        js: NONE,
        headers: &["alt-svc: .*h3"],
        dom: NONE,
    },
    SignatureRecord {
        name: "Open Graph",
        category: "Miscellaneous",
        icon: Some("Open Graph.svg"),
        website: Some("https://ogp.me"),
        confidence: Some(60.0),
        html: &["og:title", "og:image", "og:description", "property=\"og:"],
        scripts: NONE,
        js: NONE,
        headers: NONE,
        dom: NONE,
    },
    // ---------------- Languages / Databases ----------------
    SignatureRecord {
        name: "PHP",
        category: "Programming Languages",
        icon: Some("PHP.svg"),
        website: Some("https://www.php.net"),
        confidence: Some(65.0),
        html: &["\\.php(?:\\?|\")", "laravel_session"],
        scripts: &["\\.php(?:\\?|$)"],
        js: NONE,
        headers: &["x-powered-by: PHP/?(\\d+(?:\\.\\d+)*)?;version:\\1", "PHPSESSID"],
        dom: NONE,
    },
    SignatureRecord {
        name: "MySQL",
        category: "Databases",
        icon: Some("MySQL.svg"),
        website: Some("https://www.mysql.com"),
        confidence: Some(70.0),
        html: &["mysql"],
        scripts: &["mysql"],
        js: NONE,
        headers: NONE,
        dom: NONE,
    },
    // ---------------- AI ----------------
    SignatureRecord {
        name: "OpenAI",
        category: "AI Services",
        icon: Some("OpenAI.svg"),
        website: Some("https://openai.com"),
        confidence: Some(90.0),
        html: &["openai", "chatgpt", "chat\\.openai\\.com", "data-openai"],
        scripts: &[
            "api\\.openai\\.com",
            "cdn\\.openai\\.com",
            "chat\\.openai\\.com",
            "platform\\.openai\\.com",
        ],
        js: &["window\\.openai\\b", "window\\.ChatGPT\\b", "OPENAI_API_KEY"],
        headers: &["openai-organization", "openai-processing-ms"],
        dom: &["\\[data-openai"],
    },
    SignatureRecord {
        name: "Claude",
        category: "AI Services",
        icon: Some("Anthropic.svg"),
        website: Some("https://www.anthropic.com"),
        confidence: Some(85.0),
        html: &["anthropic", "claude\\.ai", "claude-ai"],
        scripts: &["api\\.anthropic\\.com", "claude\\.ai", "anthropic"],
        js: &["window\\.Claude\\b", "window\\.Anthropic\\b", "ANTHROPIC_API_KEY"],
        headers: &["anthropic-ratelimit", "anthropic-version"],
        dom: NONE,
    },
    SignatureRecord {
        name: "Google Gemini",
        category: "AI Services",
        icon: Some("Google Gemini.svg"),
        website: Some("https://gemini.google.com"),
        confidence: Some(80.0),
        html: &["gemini\\.google\\.com", "generativelanguage", "google\\.ai"],
        scripts: &["generativelanguage\\.googleapis\\.com", "ai\\.google\\.dev", "google-ai"],
        js: &["window\\.Gemini\\b", "window\\.GoogleAI\\b", "GEMINI_API_KEY"],
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "Hugging Face",
        category: "AI Services",
        icon: Some("Hugging Face.svg"),
        website: Some("https://huggingface.co"),
        confidence: Some(80.0),
        html: &["huggingface\\.co", "huggingface"],
        scripts: &["huggingface\\.co", "cdn-lfs\\.huggingface\\.co", "huggingface\\.js"],
        js: &["window\\.HuggingFace\\b", "HF_API_TOKEN"],
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "Replicate",
        category: "AI Services",
        icon: Some("Replicate.svg"),
        website: Some("https://replicate.com"),
        confidence: None,
        html: &["replicate\\.com", "replicate\\.delivery"],
        scripts: &["api\\.replicate\\.com", "replicate\\.delivery"],
        js: &["window\\.Replicate\\b", "REPLICATE_API_TOKEN"],
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "Cohere",
        category: "AI Services",
        icon: Some("Cohere.svg"),
        website: Some("https://cohere.com"),
        confidence: None,
        html: &["cohere\\.ai", "cohere\\.com"],
        scripts: &["api\\.cohere\\.ai"],
        js: &["window\\.Cohere\\b", "COHERE_API_KEY"],
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "Vercel AI SDK",
        category: "AI Services",
        icon: Some("Vercel.svg"),
        website: Some("https://sdk.vercel.ai"),
        confidence: None,
        html: &["sdk\\.vercel\\.ai", "ai\\.vercel"],
        scripts: &["sdk\\.vercel\\.ai", "/ai\\.js"],
        js: &["window\\.VercelAI\\b", "useChat", "useCompletion"],
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "Llama",
        category: "AI Services",
        icon: Some("Meta.svg"),
        website: Some("https://www.llama.com"),
        confidence: None,
        html: &["llama2", "llama\\.meta\\.com", "meta-llama"],
        scripts: &["huggingface\\.co/meta-llama", "llama\\.meta\\.com"],
        js: &["window\\.Llama\\b", "window\\.MetaAI\\b"],
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "Together AI",
        category: "AI Services",
        icon: Some("Together AI.svg"),
        website: Some("https://www.together.ai"),
        confidence: None,
        html: &["together\\.ai", "api\\.together\\.xyz"],
        scripts: &["api\\.together\\.xyz", "together\\.ai"],
        js: &["window\\.TogetherAI\\b"],
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "LangChain",
        category: "AI Development",
        icon: Some("LangChain.svg"),
        website: Some("https://www.langchain.com"),
        confidence: Some(75.0),
        html: &["langchain"],
        scripts: &["langchain"],
        js: &["window\\.LangChain\\b", "ConversationChain", "LLMChain"],
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "LlamaIndex",
        category: "AI Development",
        icon: Some("LlamaIndex.svg"),
        website: Some("https://www.llamaindex.ai"),
        confidence: Some(75.0),
        html: &["llamaindex", "gpt_index"],
        scripts: &["llamaindex", "npm/llamaindex"],
        js: &["window\\.LlamaIndex\\b", "gpt_index"],
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "TensorFlow.js",
        category: "ML Framework",
        icon: Some("TensorFlow.svg"),
        website: Some("https://www.tensorflow.org/js"),
        confidence: None,
        html: &["tensorflow", "tfjs"],
        scripts: &[
            "@tensorflow/tfjs(?:@(\\d+(?:\\.\\d+)*))?;version:\\1",
            "tensorflow\\.js",
            "tfjs",
        ],
        js: &["window\\.tf\\b", "window\\.TensorFlow\\b"],
        headers: NONE,
        dom: NONE,
    },
    SignatureRecord {
        name: "PyTorch",
        category: "ML Framework",
        icon: Some("PyTorch.svg"),
        website: Some("https://pytorch.org"),
        confidence: None,
        html: &["pytorch", "torch\\.js"],
        scripts: &["pytorch", "torch\\.js", "onnxruntime"],
        js: &["window\\.torch\\b", "window\\.PyTorch\\b"],
        headers: NONE,
        dom: NONE,
    },
];

/// 归入"AI"分组的分类（展示层置顶）
pub const AI_CATEGORIES: &[&str] = &["AI Services", "AI Development", "ML Framework"];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_unique_and_non_empty() {
        let mut seen = HashSet::new();
        for record in EMBEDDED_SIGNATURES {
            assert!(!record.name.is_empty());
            assert!(!record.category.is_empty());
            assert!(seen.insert(record.name), "duplicate signature {}", record.name);
        }
    }

    #[test]
    fn test_catalog_nominal_confidence_in_range() {
        for record in EMBEDDED_SIGNATURES {
            if let Some(c) = record.confidence {
                assert!((0.0..=100.0).contains(&c), "{} nominal confidence out of range", record.name);
            }
        }
    }
}
