//! Built-in English lexicon
//!
//! Closed-class vocabulary and the most frequent irregular forms. Open-class
//! words are left to the tagger's shape rules.
//!
//! Columns: form, coarse POS, fine tag, lemma, morphological features.

use crate::models::UPos::{self, *};

pub(crate) type BuiltinEntry = (&'static str, UPos, &'static str, &'static str, &'static str);

pub(crate) const BUILTIN_ENTRIES: &[BuiltinEntry] = &[
  // ─── Articles / determiners ───
  ("the", Det, "DT", "the", "Definite=Def|PronType=Art"),
  ("a", Det, "DT", "a", "Definite=Ind|PronType=Art"),
  ("an", Det, "DT", "an", "Definite=Ind|PronType=Art"),
  ("this", Det, "DT", "this", "Number=Sing|PronType=Dem"),
  ("that", Sconj, "IN", "that", ""),
  ("these", Det, "DT", "this", "Number=Plur|PronType=Dem"),
  ("those", Det, "DT", "that", "Number=Plur|PronType=Dem"),
  ("every", Det, "DT", "every", ""),
  ("each", Det, "DT", "each", ""),
  ("some", Det, "DT", "some", ""),
  ("any", Det, "DT", "any", ""),
  ("no", Det, "DT", "no", ""),
  ("all", Det, "DT", "all", ""),
  ("both", Det, "DT", "both", ""),
  ("either", Det, "DT", "either", ""),
  ("neither", Det, "DT", "neither", ""),
  ("another", Det, "DT", "another", ""),
  ("such", Adj, "JJ", "such", "Degree=Pos"),
  // ─── Personal pronouns ───
  ("i", Pron, "PRP", "I", "Case=Nom|Number=Sing|Person=1|PronType=Prs"),
  ("you", Pron, "PRP", "you", "Person=2|PronType=Prs"),
  ("he", Pron, "PRP", "he", "Case=Nom|Gender=Masc|Number=Sing|Person=3|PronType=Prs"),
  ("she", Pron, "PRP", "she", "Case=Nom|Gender=Fem|Number=Sing|Person=3|PronType=Prs"),
  ("it", Pron, "PRP", "it", "Gender=Neut|Number=Sing|Person=3|PronType=Prs"),
  ("we", Pron, "PRP", "we", "Case=Nom|Number=Plur|Person=1|PronType=Prs"),
  ("they", Pron, "PRP", "they", "Case=Nom|Number=Plur|Person=3|PronType=Prs"),
  ("me", Pron, "PRP", "I", "Case=Acc|Number=Sing|Person=1|PronType=Prs"),
  ("him", Pron, "PRP", "he", "Case=Acc|Gender=Masc|Number=Sing|Person=3|PronType=Prs"),
  ("her", Pron, "PRP", "she", "Case=Acc|Gender=Fem|Number=Sing|Person=3|PronType=Prs"),
  ("us", Pron, "PRP", "we", "Case=Acc|Number=Plur|Person=1|PronType=Prs"),
  ("them", Pron, "PRP", "they", "Case=Acc|Number=Plur|Person=3|PronType=Prs"),
  // ─── Possessives ───
  ("my", Pron, "PRP$", "my", "Number=Sing|Person=1|Poss=Yes|PronType=Prs"),
  ("your", Pron, "PRP$", "your", "Person=2|Poss=Yes|PronType=Prs"),
  ("his", Pron, "PRP$", "his", "Gender=Masc|Number=Sing|Person=3|Poss=Yes|PronType=Prs"),
  ("its", Pron, "PRP$", "its", "Gender=Neut|Number=Sing|Person=3|Poss=Yes|PronType=Prs"),
  ("our", Pron, "PRP$", "our", "Number=Plur|Person=1|Poss=Yes|PronType=Prs"),
  ("their", Pron, "PRP$", "their", "Number=Plur|Person=3|Poss=Yes|PronType=Prs"),
  ("mine", Pron, "PRP", "mine", "Number=Sing|Person=1|Poss=Yes|PronType=Prs"),
  ("yours", Pron, "PRP", "yours", "Person=2|Poss=Yes|PronType=Prs"),
  ("hers", Pron, "PRP", "hers", "Gender=Fem|Number=Sing|Person=3|Poss=Yes|PronType=Prs"),
  ("ours", Pron, "PRP", "ours", "Number=Plur|Person=1|Poss=Yes|PronType=Prs"),
  ("theirs", Pron, "PRP", "theirs", "Number=Plur|Person=3|Poss=Yes|PronType=Prs"),
  // ─── Reflexives ───
  ("myself", Pron, "PRP", "myself", "Case=Acc|Number=Sing|Person=1|PronType=Prs|Reflex=Yes"),
  ("yourself", Pron, "PRP", "yourself", "Case=Acc|Number=Sing|Person=2|PronType=Prs|Reflex=Yes"),
  (
    "himself",
    Pron,
    "PRP",
    "himself",
    "Case=Acc|Gender=Masc|Number=Sing|Person=3|PronType=Prs|Reflex=Yes",
  ),
  (
    "herself",
    Pron,
    "PRP",
    "herself",
    "Case=Acc|Gender=Fem|Number=Sing|Person=3|PronType=Prs|Reflex=Yes",
  ),
  (
    "itself",
    Pron,
    "PRP",
    "itself",
    "Case=Acc|Gender=Neut|Number=Sing|Person=3|PronType=Prs|Reflex=Yes",
  ),
  ("ourselves", Pron, "PRP", "ourselves", "Case=Acc|Number=Plur|Person=1|PronType=Prs|Reflex=Yes"),
  ("themselves", Pron, "PRP", "themselves", "Case=Acc|Number=Plur|Person=3|PronType=Prs|Reflex=Yes"),
  // ─── Indefinite / wh pronouns ───
  ("someone", Pron, "NN", "someone", "Number=Sing"),
  ("somebody", Pron, "NN", "somebody", "Number=Sing"),
  ("something", Pron, "NN", "something", "Number=Sing"),
  ("anyone", Pron, "NN", "anyone", "Number=Sing"),
  ("anything", Pron, "NN", "anything", "Number=Sing"),
  ("everyone", Pron, "NN", "everyone", "Number=Sing"),
  ("everything", Pron, "NN", "everything", "Number=Sing"),
  ("nobody", Pron, "NN", "nobody", "Number=Sing"),
  ("nothing", Pron, "NN", "nothing", "Number=Sing"),
  ("who", Pron, "WP", "who", ""),
  ("whom", Pron, "WP", "whom", ""),
  ("whose", Det, "WP$", "whose", "Poss=Yes"),
  ("what", Pron, "WP", "what", ""),
  ("which", Det, "WDT", "which", ""),
  ("where", Sconj, "WRB", "where", ""),
  ("when", Sconj, "WRB", "when", ""),
  ("why", Sconj, "WRB", "why", ""),
  ("how", Sconj, "WRB", "how", ""),
  // ─── Prepositions ───
  ("of", Adp, "IN", "of", ""),
  ("in", Adp, "IN", "in", ""),
  ("on", Adp, "IN", "on", ""),
  ("at", Adp, "IN", "at", ""),
  ("by", Adp, "IN", "by", ""),
  ("for", Adp, "IN", "for", ""),
  ("with", Adp, "IN", "with", ""),
  ("without", Adp, "IN", "without", ""),
  ("from", Adp, "IN", "from", ""),
  ("into", Adp, "IN", "into", ""),
  ("onto", Adp, "IN", "onto", ""),
  ("about", Adp, "IN", "about", ""),
  ("above", Adp, "IN", "above", ""),
  ("below", Adp, "IN", "below", ""),
  ("over", Adp, "IN", "over", ""),
  ("under", Adp, "IN", "under", ""),
  ("between", Adp, "IN", "between", ""),
  ("among", Adp, "IN", "among", ""),
  ("through", Adp, "IN", "through", ""),
  ("during", Adp, "IN", "during", ""),
  ("before", Adp, "IN", "before", ""),
  ("after", Adp, "IN", "after", ""),
  ("against", Adp, "IN", "against", ""),
  ("across", Adp, "IN", "across", ""),
  ("along", Adp, "IN", "along", ""),
  ("around", Adp, "IN", "around", ""),
  ("behind", Adp, "IN", "behind", ""),
  ("beside", Adp, "IN", "beside", ""),
  ("beyond", Adp, "IN", "beyond", ""),
  ("near", Adp, "IN", "near", ""),
  ("toward", Adp, "IN", "toward", ""),
  ("towards", Adp, "IN", "towards", ""),
  ("upon", Adp, "IN", "upon", ""),
  ("within", Adp, "IN", "within", ""),
  ("via", Adp, "IN", "via", ""),
  ("than", Adp, "IN", "than", ""),
  ("like", Adp, "IN", "like", ""),
  ("as", Adp, "IN", "as", ""),
  ("off", Adp, "RP", "off", ""),
  ("up", Adp, "RP", "up", ""),
  ("down", Adp, "RP", "down", ""),
  ("out", Adp, "RP", "out", ""),
  // ─── Conjunctions ───
  ("and", Cconj, "CC", "and", "ConjType=Cmp"),
  ("or", Cconj, "CC", "or", "ConjType=Cmp"),
  ("but", Cconj, "CC", "but", "ConjType=Cmp"),
  ("nor", Cconj, "CC", "nor", "ConjType=Cmp"),
  ("yet", Cconj, "CC", "yet", "ConjType=Cmp"),
  ("so", Adv, "RB", "so", ""),
  ("because", Sconj, "IN", "because", ""),
  ("although", Sconj, "IN", "although", ""),
  ("though", Sconj, "IN", "though", ""),
  ("if", Sconj, "IN", "if", ""),
  ("unless", Sconj, "IN", "unless", ""),
  ("while", Sconj, "IN", "while", ""),
  ("whether", Sconj, "IN", "whether", ""),
  ("since", Sconj, "IN", "since", ""),
  ("until", Sconj, "IN", "until", ""),
  ("whereas", Sconj, "IN", "whereas", ""),
  // ─── be ───
  ("be", Aux, "VB", "be", "VerbForm=Inf"),
  ("am", Aux, "VBP", "be", "Mood=Ind|Number=Sing|Person=1|Tense=Pres|VerbForm=Fin"),
  ("'m", Aux, "VBP", "be", "Mood=Ind|Number=Sing|Person=1|Tense=Pres|VerbForm=Fin"),
  ("is", Aux, "VBZ", "be", "Mood=Ind|Number=Sing|Person=3|Tense=Pres|VerbForm=Fin"),
  ("are", Aux, "VBP", "be", "Mood=Ind|Tense=Pres|VerbForm=Fin"),
  ("'re", Aux, "VBP", "be", "Mood=Ind|Tense=Pres|VerbForm=Fin"),
  ("was", Aux, "VBD", "be", "Mood=Ind|Number=Sing|Person=3|Tense=Past|VerbForm=Fin"),
  ("were", Aux, "VBD", "be", "Mood=Ind|Tense=Past|VerbForm=Fin"),
  ("been", Aux, "VBN", "be", "Tense=Past|VerbForm=Part"),
  ("being", Aux, "VBG", "be", "Aspect=Prog|Tense=Pres|VerbForm=Part"),
  // ─── have ───
  ("have", Aux, "VBP", "have", "Mood=Ind|Tense=Pres|VerbForm=Fin"),
  ("'ve", Aux, "VBP", "have", "Mood=Ind|Tense=Pres|VerbForm=Fin"),
  ("has", Aux, "VBZ", "have", "Mood=Ind|Number=Sing|Person=3|Tense=Pres|VerbForm=Fin"),
  ("had", Aux, "VBD", "have", "Mood=Ind|Tense=Past|VerbForm=Fin"),
  ("'d", Aux, "MD", "would", "VerbType=Mod"),
  ("having", Aux, "VBG", "have", "Aspect=Prog|Tense=Pres|VerbForm=Part"),
  // ─── do ───
  ("do", Aux, "VBP", "do", "Mood=Ind|Tense=Pres|VerbForm=Fin"),
  ("does", Aux, "VBZ", "do", "Mood=Ind|Number=Sing|Person=3|Tense=Pres|VerbForm=Fin"),
  ("did", Aux, "VBD", "do", "Mood=Ind|Tense=Past|VerbForm=Fin"),
  ("done", Verb, "VBN", "do", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("doing", Verb, "VBG", "do", "Aspect=Prog|Tense=Pres|VerbForm=Part"),
  // ─── Modals ───
  ("can", Aux, "MD", "can", "VerbType=Mod"),
  ("ca", Aux, "MD", "can", "VerbType=Mod"),
  ("could", Aux, "MD", "could", "VerbType=Mod"),
  ("will", Aux, "MD", "will", "VerbType=Mod"),
  ("wo", Aux, "MD", "will", "VerbType=Mod"),
  ("'ll", Aux, "MD", "will", "VerbType=Mod"),
  ("would", Aux, "MD", "would", "VerbType=Mod"),
  ("shall", Aux, "MD", "shall", "VerbType=Mod"),
  ("should", Aux, "MD", "should", "VerbType=Mod"),
  ("may", Aux, "MD", "may", "VerbType=Mod"),
  ("might", Aux, "MD", "might", "VerbType=Mod"),
  ("must", Aux, "MD", "must", "VerbType=Mod"),
  // ─── Particles ───
  ("to", Part, "TO", "to", ""),
  ("not", Part, "RB", "not", "Polarity=Neg"),
  ("n't", Part, "RB", "not", "Polarity=Neg"),
  ("'s", Part, "POS", "'s", ""),
  // ─── Frequent adverbs ───
  ("very", Adv, "RB", "very", ""),
  ("too", Adv, "RB", "too", ""),
  ("also", Adv, "RB", "also", ""),
  ("just", Adv, "RB", "just", ""),
  ("only", Adv, "RB", "only", ""),
  ("even", Adv, "RB", "even", ""),
  ("still", Adv, "RB", "still", ""),
  ("already", Adv, "RB", "already", ""),
  ("always", Adv, "RB", "always", ""),
  ("never", Adv, "RB", "never", ""),
  ("often", Adv, "RB", "often", ""),
  ("sometimes", Adv, "RB", "sometimes", ""),
  ("soon", Adv, "RB", "soon", ""),
  ("now", Adv, "RB", "now", ""),
  ("then", Adv, "RB", "then", "PronType=Dem"),
  ("here", Adv, "RB", "here", "PronType=Dem"),
  ("there", Pron, "EX", "there", ""),
  ("again", Adv, "RB", "again", ""),
  ("almost", Adv, "RB", "almost", ""),
  ("quite", Adv, "RB", "quite", ""),
  ("rather", Adv, "RB", "rather", ""),
  ("perhaps", Adv, "RB", "perhaps", ""),
  ("maybe", Adv, "RB", "maybe", ""),
  ("however", Adv, "RB", "however", ""),
  ("therefore", Adv, "RB", "therefore", ""),
  ("well", Adv, "RB", "well", "Degree=Pos"),
  ("more", Adv, "RBR", "more", "Degree=Cmp"),
  ("most", Adv, "RBS", "most", "Degree=Sup"),
  ("less", Adv, "RBR", "less", "Degree=Cmp"),
  ("least", Adv, "RBS", "least", "Degree=Sup"),
  // ─── Number words ───
  ("one", Num, "CD", "one", "NumType=Card"),
  ("two", Num, "CD", "two", "NumType=Card"),
  ("three", Num, "CD", "three", "NumType=Card"),
  ("four", Num, "CD", "four", "NumType=Card"),
  ("five", Num, "CD", "five", "NumType=Card"),
  ("six", Num, "CD", "six", "NumType=Card"),
  ("seven", Num, "CD", "seven", "NumType=Card"),
  ("eight", Num, "CD", "eight", "NumType=Card"),
  ("nine", Num, "CD", "nine", "NumType=Card"),
  ("ten", Num, "CD", "ten", "NumType=Card"),
  ("hundred", Num, "CD", "hundred", "NumType=Card"),
  ("thousand", Num, "CD", "thousand", "NumType=Card"),
  ("million", Num, "CD", "million", "NumType=Card"),
  ("first", Adj, "JJ", "first", "Degree=Pos|NumType=Ord"),
  ("second", Adj, "JJ", "second", "Degree=Pos|NumType=Ord"),
  ("third", Adj, "JJ", "third", "Degree=Pos|NumType=Ord"),
  // ─── Interjections ───
  ("oh", Intj, "UH", "oh", ""),
  ("yes", Intj, "UH", "yes", ""),
  ("hello", Intj, "UH", "hello", ""),
  ("hi", Intj, "UH", "hi", ""),
  ("wow", Intj, "UH", "wow", ""),
  ("please", Intj, "UH", "please", ""),
  ("thanks", Intj, "UH", "thanks", ""),
  // ─── Irregular comparison ───
  ("good", Adj, "JJ", "good", "Degree=Pos"),
  ("better", Adj, "JJR", "good", "Degree=Cmp"),
  ("best", Adj, "JJS", "good", "Degree=Sup"),
  ("bad", Adj, "JJ", "bad", "Degree=Pos"),
  ("worse", Adj, "JJR", "bad", "Degree=Cmp"),
  ("worst", Adj, "JJS", "bad", "Degree=Sup"),
  ("many", Adj, "JJ", "many", "Degree=Pos"),
  ("much", Adj, "JJ", "much", "Degree=Pos"),
  ("few", Adj, "JJ", "few", "Degree=Pos"),
  ("other", Adj, "JJ", "other", "Degree=Pos"),
  // ─── Irregular plurals ───
  ("children", Noun, "NNS", "child", "Number=Plur"),
  ("men", Noun, "NNS", "man", "Number=Plur"),
  ("women", Noun, "NNS", "woman", "Number=Plur"),
  ("people", Noun, "NNS", "people", "Number=Plur"),
  ("mice", Noun, "NNS", "mouse", "Number=Plur"),
  ("feet", Noun, "NNS", "foot", "Number=Plur"),
  ("teeth", Noun, "NNS", "tooth", "Number=Plur"),
  ("geese", Noun, "NNS", "goose", "Number=Plur"),
  ("news", Noun, "NN", "news", "Number=Sing"),
  // ─── Irregular verbs (past / participle) ───
  ("went", Verb, "VBD", "go", "Tense=Past|VerbForm=Fin"),
  ("gone", Verb, "VBN", "go", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("ran", Verb, "VBD", "run", "Tense=Past|VerbForm=Fin"),
  ("saw", Verb, "VBD", "see", "Tense=Past|VerbForm=Fin"),
  ("seen", Verb, "VBN", "see", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("took", Verb, "VBD", "take", "Tense=Past|VerbForm=Fin"),
  ("taken", Verb, "VBN", "take", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("made", Verb, "VBD", "make", "Tense=Past|VerbForm=Fin"),
  ("came", Verb, "VBD", "come", "Tense=Past|VerbForm=Fin"),
  ("got", Verb, "VBD", "get", "Tense=Past|VerbForm=Fin"),
  ("gave", Verb, "VBD", "give", "Tense=Past|VerbForm=Fin"),
  ("given", Verb, "VBN", "give", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("knew", Verb, "VBD", "know", "Tense=Past|VerbForm=Fin"),
  ("known", Verb, "VBN", "know", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("thought", Verb, "VBD", "think", "Tense=Past|VerbForm=Fin"),
  ("told", Verb, "VBD", "tell", "Tense=Past|VerbForm=Fin"),
  ("found", Verb, "VBD", "find", "Tense=Past|VerbForm=Fin"),
  ("said", Verb, "VBD", "say", "Tense=Past|VerbForm=Fin"),
  ("felt", Verb, "VBD", "feel", "Tense=Past|VerbForm=Fin"),
  ("became", Verb, "VBD", "become", "Tense=Past|VerbForm=Fin"),
  ("left", Verb, "VBD", "leave", "Tense=Past|VerbForm=Fin"),
  ("brought", Verb, "VBD", "bring", "Tense=Past|VerbForm=Fin"),
  ("began", Verb, "VBD", "begin", "Tense=Past|VerbForm=Fin"),
  ("begun", Verb, "VBN", "begin", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("kept", Verb, "VBD", "keep", "Tense=Past|VerbForm=Fin"),
  ("held", Verb, "VBD", "hold", "Tense=Past|VerbForm=Fin"),
  ("wrote", Verb, "VBD", "write", "Tense=Past|VerbForm=Fin"),
  ("written", Verb, "VBN", "write", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("stood", Verb, "VBD", "stand", "Tense=Past|VerbForm=Fin"),
  ("heard", Verb, "VBD", "hear", "Tense=Past|VerbForm=Fin"),
  ("meant", Verb, "VBD", "mean", "Tense=Past|VerbForm=Fin"),
  ("met", Verb, "VBD", "meet", "Tense=Past|VerbForm=Fin"),
  ("paid", Verb, "VBD", "pay", "Tense=Past|VerbForm=Fin"),
  ("sat", Verb, "VBD", "sit", "Tense=Past|VerbForm=Fin"),
  ("spoke", Verb, "VBD", "speak", "Tense=Past|VerbForm=Fin"),
  ("spoken", Verb, "VBN", "speak", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("led", Verb, "VBD", "lead", "Tense=Past|VerbForm=Fin"),
  ("grew", Verb, "VBD", "grow", "Tense=Past|VerbForm=Fin"),
  ("grown", Verb, "VBN", "grow", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("lost", Verb, "VBD", "lose", "Tense=Past|VerbForm=Fin"),
  ("fell", Verb, "VBD", "fall", "Tense=Past|VerbForm=Fin"),
  ("fallen", Verb, "VBN", "fall", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("sent", Verb, "VBD", "send", "Tense=Past|VerbForm=Fin"),
  ("built", Verb, "VBD", "build", "Tense=Past|VerbForm=Fin"),
  ("understood", Verb, "VBD", "understand", "Tense=Past|VerbForm=Fin"),
  ("drew", Verb, "VBD", "draw", "Tense=Past|VerbForm=Fin"),
  ("drawn", Verb, "VBN", "draw", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("broke", Verb, "VBD", "break", "Tense=Past|VerbForm=Fin"),
  ("broken", Verb, "VBN", "break", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("spent", Verb, "VBD", "spend", "Tense=Past|VerbForm=Fin"),
  ("bought", Verb, "VBD", "buy", "Tense=Past|VerbForm=Fin"),
  ("caught", Verb, "VBD", "catch", "Tense=Past|VerbForm=Fin"),
  ("taught", Verb, "VBD", "teach", "Tense=Past|VerbForm=Fin"),
  ("fought", Verb, "VBD", "fight", "Tense=Past|VerbForm=Fin"),
  ("won", Verb, "VBD", "win", "Tense=Past|VerbForm=Fin"),
  ("ate", Verb, "VBD", "eat", "Tense=Past|VerbForm=Fin"),
  ("eaten", Verb, "VBN", "eat", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("drove", Verb, "VBD", "drive", "Tense=Past|VerbForm=Fin"),
  ("driven", Verb, "VBN", "drive", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("chose", Verb, "VBD", "choose", "Tense=Past|VerbForm=Fin"),
  ("chosen", Verb, "VBN", "choose", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("flew", Verb, "VBD", "fly", "Tense=Past|VerbForm=Fin"),
  ("flown", Verb, "VBN", "fly", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("forgot", Verb, "VBD", "forget", "Tense=Past|VerbForm=Fin"),
  ("forgotten", Verb, "VBN", "forget", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("slept", Verb, "VBD", "sleep", "Tense=Past|VerbForm=Fin"),
  ("wore", Verb, "VBD", "wear", "Tense=Past|VerbForm=Fin"),
  ("worn", Verb, "VBN", "wear", "Aspect=Perf|Tense=Past|VerbForm=Part"),
  ("sang", Verb, "VBD", "sing", "Tense=Past|VerbForm=Fin"),
  ("sung", Verb, "VBN", "sing", "Aspect=Perf|Tense=Past|VerbForm=Part"),
];
