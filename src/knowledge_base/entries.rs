//! Curated mapping of themes to verses and teachings
//!
//! Pure data, no logic. Definition order matters: when two entries score
//! equally against a question, the earlier one wins, so the order below is
//! a priority ranking among themes. Do not re-sort.
//!
//! Short verse excerpts are used for educational reference.

use crate::types::Entry;

pub const CURATED_ENTRIES: &[Entry] = &[
    Entry {
        keywords: &[
            "duty",
            "dharma",
            "work",
            "karma",
            "action",
            "responsibility",
            "job",
            "career",
            "study",
            "studies",
        ],
        chapter: "2.47",
        verse: "karmaṇy-evādhikāras te mā phaleṣhu kadāchana",
        reference: "Bhagavad-gītā 2.47",
        teaching: "O Arjuna, your right is to perform your prescribed duty, but never to the fruits. Perform your work as an offering to Me, free from attachment and anxiety. When action is done in devotion, peace follows like a cool moonlight on a clear night.",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/0/08/Kurukshetra_Bhagavad_Gita.jpg",
        fallback: false,
    },
    Entry {
        keywords: &[
            "surrender",
            "take shelter",
            "refuge",
            "give up",
            "fear",
            "deliver",
            "save",
            "forgive",
            "mercy",
        ],
        chapter: "18.66",
        verse: "sarva-dharmān parityajya mām ekaṁ śharaṇaṁ vraja",
        reference: "Bhagavad-gītā 18.66",
        teaching: "Abandon all varieties of duty and simply take shelter of Me. I shall deliver you from all reactions; do not fear. Offer your heart to Me with trust—when the child holds the father's hand, the road becomes safe.",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/4/4d/Krishna_and_Arjuna.jpg",
        // The universal teaching: returned when a question carries no signal
        fallback: true,
    },
    Entry {
        keywords: &[
            "mind",
            "control",
            "meditation",
            "yoga",
            "practice",
            "abhyasa",
            "vairagya",
            "anxiety",
            "stress",
            "overthink",
        ],
        chapter: "6.35",
        verse: "asaṁśayaṁ mahā-bāho mano durnigrahaṁ chalam",
        reference: "Bhagavad-gītā 6.35",
        teaching: "The mind is restless and difficult to curb, but by constant practice and detachment it can be controlled. Begin with remembrance of Me—chant My names, hear My glories—and the mind, like a wild river, will gently find the ocean of peace.",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/7/77/Krishna_Arjuna.jpg",
        fallback: false,
    },
    Entry {
        keywords: &[
            "soul",
            "atma",
            "death",
            "birth",
            "change",
            "body",
            "eternal",
            "rebirth",
            "reincarnation",
            "die",
        ],
        chapter: "2.20",
        verse: "na jāyate mriyate vā kadācin",
        reference: "Bhagavad-gītā 2.20",
        teaching: "The soul is unborn, eternal, ever-existing, and primeval; it is not slain when the body is slain. Grief fades when one knows the self beyond the body—see with wisdom, O Arjuna, and stand steady in your duty.",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/9/9a/Bhagavad_Gita_Krishna_Arjuna.jpg",
        fallback: false,
    },
    Entry {
        keywords: &[
            "food",
            "offer",
            "prayer",
            "eat",
            "prasadam",
            "yajna",
            "devotion",
            "diet",
            "vegetarian",
            "cook",
        ],
        chapter: "9.26",
        verse: "patraṁ puṣhpaṁ phalaṁ toyaṁ yo me bhaktyā prayachchhati",
        reference: "Bhagavad-gītā 9.26",
        teaching: "If one offers Me with love a leaf, a flower, fruit, or water, I accept it. Cook and eat as an offering to Me; then even simple fare becomes sanctified, and your heart becomes light and joyful.",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/1/17/Krishna_with_flute.jpg",
        fallback: false,
    },
    Entry {
        keywords: &[
            "devotion",
            "bhakti",
            "love",
            "serve",
            "chant",
            "remember",
            "worship",
            "faith",
        ],
        chapter: "9.34",
        verse: "man-manā bhava mad-bhakto",
        reference: "Bhagavad-gītā 9.34",
        teaching: "Fix your mind on Me, become My devotee, worship Me, and offer your homage to Me; surely you will come to Me. Keep Me at the center—then your days will become a garland of auspicious moments.",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/0/0c/Krishna_and_Radha%2C_19_century%2C_India.jpg",
        fallback: false,
    },
    Entry {
        keywords: &[
            "anger",
            "lust",
            "greed",
            "kama",
            "krodha",
            "lobha",
            "desire",
            "addiction",
        ],
        chapter: "3.37",
        verse: "kāma eṣha krodha eṣha rajo-guṇa-samudbhavaḥ",
        reference: "Bhagavad-gītā 3.37",
        teaching: "It is lust only, Arjuna, born of contact with the mode of passion, which later transforms into wrath. Conquer it by regulating the senses and engaging them in My service; then your heart becomes calm like a lotus on the water.",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/6/6a/Krishna_Bhagavad_Gita.jpg",
        fallback: false,
    },
    Entry {
        keywords: &[
            "equality",
            "friend",
            "enemy",
            "see equally",
            "humble",
            "brahmana",
            "cow",
            "dog",
        ],
        chapter: "5.18",
        verse: "vidyā-vinaya-sampanne brāhmaṇe gavi hastini",
        reference: "Bhagavad-gītā 5.18",
        teaching: "The humble sages, by virtue of true knowledge, see with equal vision a learned and gentle brāhmaṇa, a cow, an elephant, a dog and a dog-eater. Cultivate respect for all beings and you will feel My presence everywhere.",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/4/42/Krishna_with_Arjuna.jpg",
        fallback: false,
    },
    Entry {
        keywords: &[
            "service",
            "seva",
            "detachment",
            "renunciation",
            "work without result",
            "selfless",
        ],
        chapter: "3.19",
        verse: "tasmād asaktaḥ satataṁ kāryaṁ karma samāchara",
        reference: "Bhagavad-gītā 3.19",
        teaching: "Therefore, without being attached to the fruits of activities, one should act as a matter of duty; for by working without attachment, one attains the Supreme. Convert every task into service and you will feel light.",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/3/3b/Krishna_and_Arjuna_in_chariot.jpg",
        fallback: false,
    },
];
