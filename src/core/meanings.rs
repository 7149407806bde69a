// Interpretation text for the numbers 1-9 and the master numbers.

pub fn life_path_meaning(number: u32) -> &'static str {
    match number {
        1 => "The Leader: Independent, ambitious, and a pioneer. You are a natural-born leader with strong determination.",
        2 => "The Peacemaker: Harmonious, diplomatic, and intuitive. You excel at cooperation and mediation.",
        3 => "The Communicator: Creative, expressive, and optimistic. You have a gift for communication and creativity.",
        4 => "The Builder: Practical, disciplined, and stable. You are methodical and reliable in all endeavors.",
        5 => "The Adventurer: Freedom-loving, adaptable, and restless. You seek variety and new experiences.",
        6 => "The Nurturer: Responsible, caring, and community-oriented. You have a strong sense of duty and service.",
        7 => "The Seeker: Analytical, spiritual, and introspective. You are drawn to deeper meanings and mysteries.",
        8 => "The Powerhouse: Ambitious, successful, and authoritative. You have strong business and material instincts.",
        9 => "The Humanitarian: Compassionate, generous, and wise. You are here to serve humanity.",
        11 => "The Master Intuitive: Highly intuitive, inspiring, and visionary. You have exceptional spiritual insight.",
        22 => "The Master Builder: Practical idealist, powerful, and transformative. You can turn dreams into reality.",
        33 => "The Master Healer: Compassionate, selfless, and a universal healer. You are here to serve humanity at the highest level.",
        _ => "A unique path awaits you.",
    }
}

pub fn expression_meaning(number: u32) -> &'static str {
    match number {
        1 => "Your destiny is to lead and inspire others through your independence and originality.",
        2 => "Your destiny involves bringing harmony and cooperation to the world.",
        3 => "Your destiny is to communicate, create, and inspire through artistic expression.",
        4 => "Your destiny is to build solid foundations and provide stability for others.",
        5 => "Your destiny involves freedom, change, and adventure in all areas of life.",
        6 => "Your destiny is to nurture, heal, and care for others in your community.",
        7 => "Your destiny involves seeking truth, wisdom, and spiritual understanding.",
        8 => "Your destiny is to achieve material success and use your power wisely.",
        9 => "Your destiny is to serve humanity and help others on their spiritual journey.",
        11 => "Your destiny is to inspire others through your intuitive insights and spiritual wisdom.",
        22 => "Your destiny is to build something lasting that benefits humanity.",
        33 => "Your destiny is to heal and uplift humanity through your compassion and wisdom.",
        _ => "Your destiny is unique and unfolding.",
    }
}

pub fn soul_urge_meaning(number: u32) -> &'static str {
    match number {
        1 => "Your soul craves independence, leadership, and the freedom to be yourself.",
        2 => "Your soul seeks harmony, partnership, and peaceful relationships.",
        3 => "Your soul desires creative expression, joy, and communication.",
        4 => "Your soul seeks security, stability, and a solid foundation.",
        5 => "Your soul craves freedom, adventure, and new experiences.",
        6 => "Your soul seeks to nurture, heal, and care for others.",
        7 => "Your soul desires spiritual understanding, wisdom, and inner peace.",
        8 => "Your soul seeks material success, power, and recognition.",
        9 => "Your soul desires to serve humanity and make a difference in the world.",
        11 => "Your soul seeks to inspire others through your intuitive gifts.",
        22 => "Your soul desires to build something meaningful for humanity.",
        33 => "Your soul seeks to heal and uplift others through compassion.",
        _ => "Your soul has unique desires and aspirations.",
    }
}

pub fn personality_meaning(number: u32) -> &'static str {
    match number {
        1 => "You appear confident, independent, and a natural leader to others.",
        2 => "You appear diplomatic, cooperative, and peace-loving to others.",
        3 => "You appear creative, expressive, and optimistic to others.",
        4 => "You appear practical, reliable, and hardworking to others.",
        5 => "You appear adventurous, freedom-loving, and adaptable to others.",
        6 => "You appear caring, responsible, and nurturing to others.",
        7 => "You appear wise, analytical, and spiritually inclined to others.",
        8 => "You appear ambitious, successful, and authoritative to others.",
        9 => "You appear compassionate, generous, and humanitarian to others.",
        11 => "You appear intuitive, inspiring, and spiritually gifted to others.",
        22 => "You appear capable, visionary, and masterful to others.",
        33 => "You appear healing, compassionate, and spiritually evolved to others.",
        _ => "Your personality is unique and multifaceted.",
    }
}

pub fn number_keywords(number: u32) -> &'static str {
    match number {
        1 => "Leadership, independence, originality",
        2 => "Cooperation, diplomacy, harmony",
        3 => "Creativity, communication, joy",
        4 => "Stability, practicality, hard work",
        5 => "Freedom, adventure, change",
        6 => "Responsibility, nurturing, service",
        7 => "Spirituality, analysis, wisdom",
        8 => "Material success, power, authority",
        9 => "Humanitarianism, completion, wisdom",
        11 => "Intuition, inspiration, spiritual insight",
        22 => "Master builder, practical idealism",
        33 => "Master healer, universal compassion",
        _ => "Unique spiritual significance",
    }
}
