use std::collections::HashMap;

use super::PosTag;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another", "such", "what", "which", "whose", "my",
    "your", "his", "her", "its", "our", "their",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "who", "whom",
    "whoever", "something", "anything", "nothing", "everything", "someone", "anyone",
    "everyone", "nobody", "somebody", "mine", "yours", "hers", "ours", "theirs",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "over", "under", "around", "among", "across", "along", "behind", "beyond", "near",
    "within", "without", "upon", "toward", "towards", "onto", "via", "despite", "throughout",
    "per", "like", "since", "until", "than", "inside", "outside", "beside", "besides",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet", "so", "plus"];

const SUBORDINATORS: &[&str] = &[
    "if", "because", "although", "though", "while", "whereas", "unless", "whether", "as",
    "when", "where", "once", "whenever", "wherever",
];

const AUXILIARIES: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "'s", "'re", "'ve", "'ll", "'d", "isn't", "aren't", "wasn't", "weren't", "don't",
    "doesn't", "didn't", "won't", "can't", "couldn't", "shouldn't", "wouldn't",
];

const PARTICLES: &[&str] = &["not", "n't"];

const ADVERBS: &[&str] = &[
    "today", "yesterday", "tomorrow", "tonight", "now", "then", "here", "there", "very",
    "also", "too", "often", "always", "never", "sometimes", "usually", "already", "still",
    "just", "even", "only", "quite", "rather", "almost", "soon", "again", "ever", "perhaps",
    "however", "therefore", "thus", "moreover", "furthermore", "instead", "otherwise",
    "indeed", "how", "why", "away", "back", "later", "once", "else", "far", "well",
    "hence", "meanwhile", "nevertheless", "nonetheless", "somewhat", "together",
];

const NUMERALS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand", "million",
    "billion",
];

const ADJECTIVES: &[&str] = &[
    "quick", "brown", "lazy", "old", "new", "good", "great", "high", "low", "large", "small",
    "big", "long", "short", "little", "young", "important", "different", "same", "other",
    "many", "much", "few", "more", "most", "less", "least", "early", "late", "hard", "easy",
    "best", "better", "worse", "worst", "own", "main", "major", "minor", "general",
    "public", "private", "social", "human", "natural", "whole", "full", "free", "real",
    "true", "false", "common", "simple", "possible", "certain", "clear", "various",
    "several", "significant", "red", "green", "blue", "black", "white", "yellow", "dark",
    "light", "hot", "cold", "warm", "cool", "first", "second", "third", "last", "next",
    "final", "entire", "special", "strong", "weak", "deep", "wide", "narrow", "heavy",
    "rich", "poor", "modern", "ancient", "local", "national", "global", "central",
    "physical", "chemical", "biological", "political", "economic", "basic", "key",
    "able", "similar", "necessary", "available", "likely", "single", "specific", "recent",
    "open", "close", "busy", "fast", "slow", "safe", "dry", "wet", "tall", "fine", "nice", "bad",
];

const VERBS: &[&str] = &[
    "make", "makes", "made", "take", "takes", "took", "taken", "give", "gives", "gave",
    "given", "get", "gets", "got", "go", "goes", "went", "gone", "come", "comes", "came",
    "see", "sees", "saw", "seen", "know", "knows", "knew", "known", "think", "thinks",
    "thought", "say", "says", "said", "find", "finds", "found", "become", "becomes",
    "became", "begin", "begins", "began", "begun", "keep", "keeps", "kept", "grow", "grows",
    "grew", "grown", "provide", "provides", "contain", "contains", "include", "includes",
    "produce", "produces", "require", "requires", "allow", "allows", "jumps", "runs", "ran",
    "sat", "stood", "wrote", "written", "spoke", "spoken", "told", "felt", "brought",
    "bought", "caught", "taught", "meant", "built", "sent", "spent", "held", "lost", "led",
    "met", "paid", "heard", "understood", "called", "occurs", "consists", "represents",
    "describes", "explains", "depends", "remains", "seems", "appears", "involves",
];

// Nouns the suffix rules would otherwise mis-tag.
const NOUNS: &[&str] = &[
    "family", "supply", "assembly", "reply", "ally", "belly", "jelly", "rally", "butterfly",
    "table", "cable", "vegetable", "animal", "signal", "capital", "metal", "festival",
    "hospital", "material", "interval", "thing", "king", "ring", "spring", "string",
    "wing", "ceiling", "evening", "morning", "bed", "shed", "seed", "need", "speed", "creed",
];

/// Word list backing [`RuleAnalyzer`](super::RuleAnalyzer), keyed by lowercase text.
pub fn default_lexicon() -> HashMap<String, PosTag> {
    let groups: &[(&[&str], PosTag)] = &[
        (ADVERBS, PosTag::Adv),
        (ADJECTIVES, PosTag::Adj),
        (VERBS, PosTag::Verb),
        (NOUNS, PosTag::Noun),
        (NUMERALS, PosTag::Num),
        (PARTICLES, PosTag::Part),
        (CONJUNCTIONS, PosTag::Cconj),
        (SUBORDINATORS, PosTag::Sconj),
        (ADPOSITIONS, PosTag::Adp),
        (AUXILIARIES, PosTag::Aux),
        (PRONOUNS, PosTag::Pron),
        (DETERMINERS, PosTag::Det),
    ];

    // Later groups win on overlap, so closed classes take precedence.
    let mut map = HashMap::new();
    for (words, tag) in groups {
        for w in *words {
            map.insert(w.to_string(), *tag);
        }
    }
    map
}
