//! Closed word lists for the bundled tagger, keyed by Penn Treebank tag.

pub(crate) const TAGGED_WORDS: &[(&str, &[&str])] = &[
    (
        "DT",
        &[
            "the", "a", "an", "this", "that", "these", "those", "some", "any", "every", "each",
            "no", "all", "both", "another", "either", "neither",
        ],
    ),
    (
        "PRP",
        &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
            "mine", "yours", "hers", "ours", "theirs", "myself", "yourself", "himself",
            "herself", "itself", "ourselves", "yourselves", "themselves",
        ],
    ),
    ("PRP$", &["my", "your", "his", "its", "our", "their"]),
    ("WP", &["who", "whom", "what"]),
    ("WP$", &["whose"]),
    ("WDT", &["which"]),
    ("WRB", &["when", "where", "why", "how"]),
    (
        "IN",
        &[
            "in", "on", "at", "from", "with", "by", "for", "of", "about", "between", "among",
            "through", "during", "before", "after", "above", "below", "under", "over",
            "behind", "beside", "near", "within", "without", "despite", "except", "into",
            "onto", "upon", "since", "until", "because", "although", "though", "while", "if",
            "unless", "whether", "as", "than",
        ],
    ),
    ("CC", &["and", "or", "but", "nor", "yet", "so"]),
    ("TO", &["to"]),
    (
        "MD",
        &[
            "can", "could", "may", "might", "must", "shall", "should", "will", "would",
            "can't", "won't", "couldn't", "shouldn't", "wouldn't",
        ],
    ),
    (
        "UH",
        &["oh", "wow", "ouch", "hello", "hi", "goodbye", "bye", "hey", "ah"],
    ),
    (
        "CD",
        &[
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "hundred", "thousand", "million",
        ],
    ),
    (
        "RB",
        &[
            "not", "very", "really", "quickly", "slowly", "carefully", "happily", "sadly",
            "too", "quite", "rather", "almost", "always", "never", "sometimes", "often",
            "rarely", "usually", "here", "there", "now", "then", "today", "yesterday",
            "tomorrow", "already", "still", "just", "only", "well", "also", "soon", "ago",
            "again", "badly", "extremely",
        ],
    ),
    ("RBR", &["more", "less", "worse"]),
    ("RBS", &["most", "least", "worst"]),
    (
        "JJ",
        &[
            "big", "small", "red", "blue", "green", "happy", "sad", "smart", "beautiful",
            "ugly", "good", "bad", "new", "old", "young", "tall", "short", "rich", "poor",
            "busy", "free", "easy", "difficult", "important", "necessary", "possible",
            "impossible", "different", "great", "little", "long", "large", "high", "early",
            "late", "hot", "cold", "nice", "last", "next", "other", "same", "sure", "ready",
        ],
    ),
    ("JJR", &["better", "bigger", "smaller", "older", "younger", "taller"]),
    ("JJS", &["best", "biggest", "smallest", "oldest", "youngest", "tallest"]),
    (
        "NN",
        &[
            "book", "cat", "dog", "house", "car", "student", "teacher", "computer", "city",
            "country", "food", "water", "day", "time", "year", "person", "man", "woman",
            "child", "boy", "girl", "friend", "family", "school", "job", "money", "life",
            "world", "way", "thing", "problem", "question", "answer", "idea", "mind", "fact",
            "case", "point", "system", "group", "company", "business", "market", "team",
            "customer", "product", "service", "price", "cost", "technology", "software",
            "data", "information", "research", "development", "management", "movie", "park",
            "week", "month", "night", "morning", "home", "office", "store", "letter",
            "music", "game", "weather", "english",
        ],
    ),
    ("NNS", &["people", "children", "men", "women", "movies", "friends"]),
    (
        "NNP",
        &[
            "john", "mary", "london", "paris", "america", "china", "germany", "france",
            "japan", "russia", "google", "microsoft", "monday", "tuesday", "wednesday",
            "thursday", "friday", "saturday", "sunday", "january", "february", "march",
            "april", "june", "july", "august",
        ],
    ),
    (
        "VB",
        &[
            "be", "go", "do", "make", "take", "give", "find", "use", "help", "start", "stop",
            "create", "build", "design", "test", "come", "see", "hear", "know", "think",
            "feel", "want", "need", "like", "love", "hate", "eat", "drink", "play", "live",
            "run", "walk", "read", "write", "study", "speak", "finish", "get", "fly", "buy",
            "sleep",
        ],
    ),
    ("VBP", &["am", "are", "have", "don't", "aren't", "haven't"]),
    (
        "VBZ",
        &[
            "is", "has", "does", "goes", "makes", "takes", "gives", "comes", "sees", "knows",
            "thinks", "likes", "loves", "wants", "needs", "eats", "plays", "works", "lives",
            "runs", "walks", "reads", "writes", "speaks", "gets", "flies", "doesn't", "isn't",
            "hasn't",
        ],
    ),
    (
        "VBD",
        &[
            "was", "were", "had", "did", "went", "made", "took", "gave", "found", "came",
            "saw", "heard", "knew", "thought", "felt", "wanted", "needed", "liked", "loved",
            "ate", "drank", "played", "worked", "lived", "ran", "walked", "studied", "spoke",
            "wrote", "finished", "bought", "slept", "didn't", "wasn't", "weren't",
        ],
    ),
    (
        "VBN",
        &[
            "been", "gone", "done", "taken", "given", "eaten", "seen", "written", "spoken",
            "known", "flown",
        ],
    ),
    (
        "VBG",
        &[
            "being", "going", "doing", "making", "running", "walking", "eating", "sleeping",
            "studying", "working", "playing", "writing", "reading", "speaking",
        ],
    ),
];
