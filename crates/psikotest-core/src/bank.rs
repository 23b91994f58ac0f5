//! The fixed question bank.
//!
//! All question data is compiled into the binary. Cognitive and interest
//! modules are built from short item cycles that repeat until the module's
//! question count is reached: question `i` is `CYCLE[i % CYCLE.len()]`.

use serde::Serialize;

use crate::model::RiasecDimension::{
    Artistic, Conventional, Enterprising, Investigative, Realistic, Social,
};
use crate::model::{Module, RiasecDimension};

/// A multiple-choice cognitive item.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    /// Zero-based index of the correct option.
    pub correct: u8,
    /// Symbol sequence shown above visual-reasoning items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<&'static str>,
}

/// A forced-choice interest item.
#[derive(Debug, Clone, Serialize)]
pub struct InterestQuestion {
    pub prompt: &'static str,
    pub option_a: &'static str,
    pub option_b: &'static str,
}

/// Personality statements, ten per trait in trait order.
pub static PERSONALITY_STATEMENTS: [&str; 50] = [
    // Openness
    "Saya senang mencoba hal-hal baru dan berbeda",
    "Saya memiliki imajinasi yang aktif",
    "Saya tertarik dengan ide-ide abstrak",
    "Saya suka berpetualang dan mengeksplorasi",
    "Saya terbuka terhadap cara berpikir yang berbeda",
    "Saya menikmati keindahan seni dan alam",
    "Saya tidak suka rutinitas yang monoton",
    "Saya sering merenungkan hal-hal yang mendalam",
    "Saya penasaran tentang banyak hal",
    "Saya kreatif dan suka menciptakan sesuatu yang baru",
    // Conscientiousness
    "Saya selalu menyelesaikan tugas tepat waktu",
    "Saya bekerja dengan sistematis dan teratur",
    "Saya sangat memperhatikan detail",
    "Saya dapat diandalkan dalam menepati janji",
    "Saya merencanakan aktivitas dengan matang",
    "Saya orang yang disiplin",
    "Saya suka lingkungan yang bersih dan rapi",
    "Saya mempersiapkan diri dengan baik untuk segala sesuatu",
    "Saya tidak suka menunda-nunda pekerjaan",
    "Saya bekerja keras untuk mencapai tujuan saya",
    // Extraversion
    "Saya merasa nyaman berada di keramaian",
    "Saya mudah memulai percakapan dengan orang baru",
    "Saya menikmati menjadi pusat perhatian",
    "Saya energik dan antusias",
    "Saya suka bekerja dalam tim",
    "Saya banyak bicara dan ekspresif",
    "Saya merasa bersemangat setelah berinteraksi sosial",
    "Saya memiliki banyak teman dan kenalan",
    "Saya optimis dalam memandang masa depan",
    "Saya suka menghadiri pesta atau acara sosial",
    // Agreeableness
    "Saya mudah mempercayai orang lain",
    "Saya senang membantu orang yang membutuhkan",
    "Saya cenderung memaafkan kesalahan orang lain",
    "Saya menghindari konflik dan perdebatan",
    "Saya kooperatif dalam bekerja sama",
    "Saya peduli dengan perasaan orang lain",
    "Saya sabar dan tidak mudah marah",
    "Saya bersikap hangat dan ramah kepada semua orang",
    "Saya bersimpati pada orang yang kurang beruntung",
    "Saya percaya pada kebaikan sifat manusia",
    // Neuroticism
    "Saya mudah merasa cemas atau khawatir",
    "Saya sering merasa stres dengan pekerjaan",
    "Saya mudah tersinggung atau marah",
    "Saya sering merasa sedih tanpa alasan jelas",
    "Saya sulit mengendalikan emosi",
    "Suasana hati saya sering berubah-ubah",
    "Saya sering memikirkan hal-hal yang membuat saya cemas",
    "Saya pesimis tentang masa depan",
    "Saya merasa tidak aman",
    "Saya sering merasa kesepian",
];

/// Labels for the five Likert points, 1 through 5.
pub static LIKERT_LABELS: [&str; 5] = [
    "Sangat Tidak Setuju",
    "Tidak Setuju",
    "Netral",
    "Setuju",
    "Sangat Setuju",
];

static LOGIC_CYCLE: [Question; 5] = [
    Question {
        prompt: "Jika A > B dan B > C, maka:",
        options: &["A = C", "A < C", "A > C", "A ≤ C"],
        correct: 2,
        pattern: None,
    },
    Question {
        prompt: "Semua kucing adalah mamalia. Felix adalah kucing. Maka:",
        options: &[
            "Felix bukan mamalia",
            "Felix adalah mamalia",
            "Felix mungkin mamalia",
            "Tidak dapat disimpulkan",
        ],
        correct: 1,
        pattern: None,
    },
    Question {
        prompt: "Lanjutkan deret: 2, 4, 8, 16, ...",
        options: &["20", "24", "32", "64"],
        correct: 2,
        pattern: None,
    },
    Question {
        prompt: "Jika kemarin adalah hari Jumat, lusa adalah hari...",
        options: &["Sabtu", "Minggu", "Senin", "Selasa"],
        correct: 2,
        pattern: None,
    },
    Question {
        prompt: "Mana yang tidak termasuk dalam kelompok: Apel, Jeruk, Pisang, Mawar",
        options: &["Apel", "Jeruk", "Pisang", "Mawar"],
        correct: 3,
        pattern: None,
    },
];

static NUMERIC_CYCLE: [Question; 4] = [
    Question {
        prompt: "Berapa 15% dari 240?",
        options: &["24", "36", "48", "54"],
        correct: 1,
        pattern: None,
    },
    Question {
        prompt: "Jika harga naik 20% kemudian turun 20%, maka harga akhir adalah:",
        options: &[
            "Sama seperti awal",
            "Lebih tinggi 4%",
            "Lebih rendah 4%",
            "Lebih rendah 2%",
        ],
        correct: 2,
        pattern: None,
    },
    Question {
        prompt: "Hasil dari 12 x (15 + 5) adalah:",
        options: &["240", "185", "300", "200"],
        correct: 0,
        pattern: None,
    },
    Question {
        prompt: "Sebuah mobil menempuh 120 km dalam 2 jam. Berapa kecepatannya?",
        options: &["40 km/jam", "50 km/jam", "60 km/jam", "80 km/jam"],
        correct: 2,
        pattern: None,
    },
];

static VERBAL_CYCLE: [Question; 4] = [
    Question {
        prompt: "Sinonim dari kata 'INOVASI' adalah:",
        options: &["Pembaruan", "Pengulangan", "Peniruan", "Penghapusan"],
        correct: 0,
        pattern: None,
    },
    Question {
        prompt: "Antonim dari kata 'OPTIMIS' adalah:",
        options: &["Realistis", "Pesimis", "Praktis", "Idealis"],
        correct: 1,
        pattern: None,
    },
    Question {
        prompt: "Pilih kata yang paling sesuai: Rumah : Atap :: Buku : ...",
        options: &["Halaman", "Penulis", "Sampul", "Cerita"],
        correct: 2,
        pattern: None,
    },
    Question {
        prompt: "Manakah yang merupakan peribahasa?",
        options: &[
            "Makan hati",
            "Besar kepala",
            "Air beriak tanda tak dalam",
            "Kambing hitam",
        ],
        correct: 2,
        pattern: None,
    },
];

static VISUAL_CYCLE: [Question; 3] = [
    Question {
        prompt: "Gambar mana yang melengkapi pola berikut?",
        options: &["○", "△", "□", "◇"],
        correct: 1,
        pattern: Some("○ △ ○ △ ○ ?"),
    },
    Question {
        prompt: "Pola: → ↑ ← ↓ → ?",
        options: &["↑", "↓", "→", "←"],
        correct: 0,
        pattern: None,
    },
    Question {
        prompt: "Pola: 1, 4, 9, 16, ?",
        options: &["20", "24", "25", "36"],
        correct: 2,
        pattern: None,
    },
];

static INTEREST_CYCLE: [InterestQuestion; 6] = [
    InterestQuestion {
        prompt: "Saya lebih suka:",
        option_a: "Bekerja dengan mesin atau alat (Realistic)",
        option_b: "Menganalisis data atau masalah (Investigative)",
    },
    InterestQuestion {
        prompt: "Saya lebih suka:",
        option_a: "Membuat karya seni atau desain (Artistic)",
        option_b: "Membantu dan mengajar orang (Social)",
    },
    InterestQuestion {
        prompt: "Saya lebih suka:",
        option_a: "Mempengaruhi atau memimpin orang (Enterprising)",
        option_b: "Bekerja dengan data yang terorganisir (Conventional)",
    },
    InterestQuestion {
        prompt: "Saya lebih suka:",
        option_a: "Meneliti teori-teori ilmiah (Investigative)",
        option_b: "Menulis cerita atau puisi (Artistic)",
    },
    InterestQuestion {
        prompt: "Saya lebih suka:",
        option_a: "Memberi konseling kepada orang lain (Social)",
        option_b: "Menjual produk atau ide (Enterprising)",
    },
    InterestQuestion {
        prompt: "Saya lebih suka:",
        option_a: "Mengelola anggaran atau catatan keuangan (Conventional)",
        option_b: "Memperbaiki peralatan elektronik (Realistic)",
    },
];

/// Dimension pair scored by each interest item: `(for A, for B)`.
///
/// Indexed by `item % INTEREST_MAPPING.len()`. This table is independent of
/// the option text cycle above.
pub static INTEREST_MAPPING: [(RiasecDimension, RiasecDimension); 15] = [
    (Realistic, Investigative),
    (Artistic, Social),
    (Enterprising, Conventional),
    (Investigative, Artistic),
    (Social, Enterprising),
    (Conventional, Realistic),
    (Realistic, Social),
    (Investigative, Enterprising),
    (Artistic, Conventional),
    (Social, Realistic),
    (Enterprising, Investigative),
    (Conventional, Artistic),
    (Realistic, Artistic),
    (Investigative, Social),
    (Artistic, Enterprising),
];

fn cognitive_cycle(module: Module) -> &'static [Question] {
    match module {
        Module::Logic => &LOGIC_CYCLE,
        Module::Numeric => &NUMERIC_CYCLE,
        Module::Verbal => &VERBAL_CYCLE,
        Module::Visual => &VISUAL_CYCLE,
        Module::Personality | Module::Interest => &[],
    }
}

/// The personality statement at `index`, if in range.
pub fn personality_statement(index: usize) -> Option<&'static str> {
    PERSONALITY_STATEMENTS.get(index).copied()
}

/// The cognitive question at `index` of `module`.
///
/// Returns `None` for non-cognitive modules and out-of-range indices.
pub fn cognitive_question(module: Module, index: usize) -> Option<&'static Question> {
    let cycle = cognitive_cycle(module);
    if cycle.is_empty() || index >= module.question_count() {
        return None;
    }
    cycle.get(index % cycle.len())
}

/// All questions of a cognitive module, in administration order.
pub fn cognitive_questions(module: Module) -> impl Iterator<Item = &'static Question> {
    let cycle = cognitive_cycle(module);
    let count = if cycle.is_empty() {
        0
    } else {
        module.question_count()
    };
    cycle.iter().cycle().take(count)
}

/// The interest item at `index`, if in range.
pub fn interest_question(index: usize) -> Option<&'static InterestQuestion> {
    if index >= Module::Interest.question_count() {
        return None;
    }
    INTEREST_CYCLE.get(index % INTEREST_CYCLE.len())
}

/// The `(A, B)` dimension pair for interest item `index`.
pub fn interest_dimensions(index: usize) -> (RiasecDimension, RiasecDimension) {
    INTEREST_MAPPING[index % INTEREST_MAPPING.len()]
}
