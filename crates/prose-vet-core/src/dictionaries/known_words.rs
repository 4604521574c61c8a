//! Known-words dictionary for the spelling checker.
//!
//! A bounded, curated list of common English words. This is deliberately
//! not a full spellchecking corpus: rare but correct words will be absent,
//! and the spelling checker is lenient accordingly (capitalized tokens,
//! inflections, numbers, URLs, and code are never flagged).

use std::collections::HashSet;
use std::sync::LazyLock;

/// Base dictionary of known words, all lowercase.
pub static KNOWN_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Function words
    set.extend([
        "the", "a", "an", "and", "or", "but", "nor", "so", "yet", "in", "on", "at", "to", "for",
        "of", "with", "by", "from", "up", "down", "out", "off", "over", "under", "about", "into",
        "onto", "through", "during", "before", "after", "above", "below", "between", "among",
        "against", "within", "without", "along", "across", "behind", "beyond", "near", "since",
        "until", "while", "because", "although", "though", "unless", "whether", "if", "than",
        "then", "as", "that", "this", "these", "those", "it", "its", "they", "them", "their",
        "theirs", "we", "us", "our", "ours", "you", "your", "yours", "he", "him", "his", "she",
        "her", "hers", "i", "me", "my", "mine", "who", "whom", "whose", "which", "what", "when",
        "where", "why", "how", "all", "any", "both", "each", "few", "more", "most", "other",
        "some", "such", "no", "not", "only", "own", "same", "too", "very", "just", "also",
        "there", "here", "now", "again", "once", "ever", "never", "always", "often", "sometimes",
        "usually", "already", "still", "even", "much", "many", "every", "either", "neither",
        "another", "itself", "himself", "herself", "themselves", "ourselves", "myself",
        "yourself", "anything", "everything", "nothing", "something", "anyone", "everyone",
        "someone", "nobody",
    ]);

    // Auxiliaries and common verbs
    set.extend([
        "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "doing", "done", "will", "would", "shall", "should", "can", "could",
        "may", "might", "must", "go", "goes", "went", "gone", "going", "make", "made", "making",
        "get", "got", "gotten", "say", "said", "know", "knew", "known", "think", "thought",
        "come", "came", "take", "took", "taken", "see", "saw", "seen", "want", "look", "use",
        "used", "find", "found", "give", "gave", "given", "tell", "told", "work", "call", "try",
        "tried", "ask", "need", "feel", "felt", "become", "became", "leave", "left", "put",
        "run", "ran", "keep", "kept", "let", "begin", "began", "begun", "show", "showed",
        "shown", "hear", "heard", "play", "move", "live", "believe", "bring", "brought",
        "happen", "write", "wrote", "written", "provide", "sit", "sat", "stand", "stood",
        "lose", "lost", "pay", "paid", "meet", "met", "include", "continue", "set", "learn",
        "learned", "change", "lead", "led", "understand", "understood", "watch", "follow",
        "stop", "create", "speak", "spoke", "spoken", "read", "allow", "add", "spend", "spent",
        "grow", "grew", "grown", "open", "walk", "win", "won", "offer", "remember", "love",
        "consider", "appear", "buy", "bought", "wait", "serve", "die", "send", "sent", "expect",
        "build", "built", "stay", "fall", "fell", "fallen", "cut", "reach", "kill", "remain",
        "suggest", "raise", "pass", "sell", "sold", "require", "report", "decide", "pull",
        "return", "explain", "hope", "develop", "carry", "break", "broke", "broken", "receive",
        "agree", "support", "hit", "produce", "eat", "ate", "eaten", "cover", "catch", "caught",
        "draw", "drew", "drawn", "choose", "chose", "chosen", "seem", "help", "talk", "turn",
        "start", "might", "like", "mention", "arrive", "describe", "contain", "check", "test",
        "validate", "fix", "review", "publish", "ship", "edit", "update", "delete", "remove",
        "replace", "insert", "improve", "complete", "finish", "share", "save", "load", "fail",
        "match", "skip", "accept", "reject", "confirm", "verify", "ignore", "handle", "process",
        "parse", "scan", "detect", "flag", "emit", "render", "format",
    ]);

    // Common nouns
    set.extend([
        "time", "year", "people", "way", "day", "man", "woman", "child", "children", "world",
        "life", "hand", "part", "eye", "place", "week", "case", "point", "government", "company",
        "number", "group", "problem", "fact", "money", "month", "lot", "right", "study", "book",
        "word", "business", "issue", "side", "kind", "head", "house", "service", "friend",
        "father", "mother", "power", "hour", "game", "line", "end", "member", "law", "car",
        "city", "community", "name", "president", "team", "minute", "idea", "kid", "body",
        "information", "back", "parent", "face", "others", "level", "office", "door", "health",
        "person", "art", "war", "history", "party", "result", "morning", "reason", "research",
        "girl", "boy", "guy", "moment", "air", "teacher", "force", "education", "foot", "feet",
        "cat", "dog", "bird", "mat", "home", "room", "area", "story", "question", "answer",
        "school", "state", "family", "student", "country", "example", "letter", "paper", "note",
        "page", "chapter", "title", "text", "document", "file", "folder", "draft", "copy",
        "content", "context", "summary", "section", "heading", "sentence", "paragraph", "list",
        "item", "table", "figure", "image", "link", "reference", "source", "detail", "error",
        "mistake", "warning", "message", "suggestion", "severity", "category", "rule", "style",
        "grammar", "spelling", "capitalization", "punctuation", "placeholder", "marker",
        "honorific", "abbreviation", "dictionary", "lowercase", "uppercase", "tool", "code",
        "software", "program",
        "system", "project", "version", "release", "user", "reader", "writer", "author",
        "editor", "reviewer", "status", "report", "output", "input", "value", "thing", "stuff",
        "water", "food", "music", "color", "light", "night", "road", "tree", "river", "field",
        "price", "cost", "order", "market", "plan", "goal", "effort", "chance", "choice",
        "change", "view", "voice", "sound", "sense", "mind", "heart", "truth", "doubt", "hope",
        "news", "event", "meeting", "conversation", "discussion", "decision", "action", "step",
        "stage", "model", "pattern", "structure", "feature", "function", "purpose", "scope",
        "limit", "range", "type", "form", "shape", "size", "weight", "amount", "piece", "bit",
    ]);

    // Adjectives and adverbs
    set.extend([
        "good", "new", "first", "last", "long", "great", "little", "old", "big", "high",
        "different", "small", "large", "next", "early", "young", "important", "public", "bad",
        "able", "best", "better", "worse", "worst", "sure", "free", "low", "late", "hard",
        "easy", "simple", "clear", "full", "empty", "short", "strong", "weak", "true", "false",
        "real", "whole", "main", "major", "minor", "common", "rare", "certain", "possible",
        "likely", "ready", "recent", "final", "open", "close", "closed", "wrong", "correct",
        "fast", "slow", "quick", "deep", "wide", "narrow", "rich", "poor", "happy", "sad",
        "nice", "fine", "fair", "safe", "dangerous", "special", "general", "specific", "exact",
        "single", "several", "various", "entire", "complete", "useful", "helpful", "careful",
        "serious", "obvious", "necessary", "available", "current", "previous", "following",
        "additional", "extra", "missing", "broken", "valid", "invalid", "proper", "plain",
        "direct", "quiet", "loud", "warm", "cold", "hot", "cool", "dark", "bright", "heavy",
        "however", "therefore", "instead", "perhaps", "maybe", "quite", "rather", "really",
        "actually", "probably", "nearly", "almost", "enough", "together", "away", "around",
        "forward", "indeed", "soon", "later", "today", "tomorrow", "yesterday", "well",
        "better", "far", "further", "least", "less", "alone", "overall", "otherwise",
    ]);

    set
});

/// Check whether `word` appears in the base dictionary, case-insensitively.
pub fn is_known_word(word: &str) -> bool {
    KNOWN_WORDS.contains(word.to_lowercase().as_str())
}
