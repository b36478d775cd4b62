//! Move names and base PP.
//!
//! Move ids are shared by all three generations; each generation only
//! extends the table. PP values are the generation 3 ones.

pub const GEN1_MAX_MOVE_ID: u16 = 165;
pub const GEN2_MAX_MOVE_ID: u16 = 251;
pub const MAX_MOVE_ID: u16 = 354;

pub const TACKLE: u16 = 33;
pub const GROWL: u16 = 45;

const MAX_PP_UPS: u8 = 3;
const GEN12_PP_UP_STEP_CAP: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub name: &'static str,
    pub pp: u8,
}

const fn mv(name: &'static str, pp: u8) -> Move {
    Move { name, pp }
}

pub fn by_id(id: u16) -> Option<&'static Move> {
    if id == 0 {
        return None;
    }
    MOVES.get(usize::from(id) - 1)
}

pub fn name(id: u16) -> &'static str {
    match id {
        0 => "-",
        _ => by_id(id).map_or("???", |m| m.name),
    }
}

pub fn base_pp(id: u16) -> u8 {
    by_id(id).map_or(0, |m| m.pp)
}

pub fn max_move_id(generation: u8) -> u16 {
    match generation {
        1 => GEN1_MAX_MOVE_ID,
        2 => GEN2_MAX_MOVE_ID,
        _ => MAX_MOVE_ID,
    }
}

/// Full PP for `id` after `pp_ups` PP Ups. Generation 1 and 2 add at most 7
/// per PP Up.
pub fn max_pp(id: u16, pp_ups: u8, generation: u8) -> u8 {
    let base = base_pp(id);
    let mut step = base / 5;
    if generation <= 2 {
        step = step.min(GEN12_PP_UP_STEP_CAP);
    }
    base + step * pp_ups.min(MAX_PP_UPS)
}

#[rustfmt::skip]
const MOVES: [Move; MAX_MOVE_ID as usize] = [
    mv("Pound",           35),
    mv("Karate Chop",     25),
    mv("Double Slap",     10),
    mv("Comet Punch",     15),
    mv("Mega Punch",      20),
    mv("Pay Day",         20),
    mv("Fire Punch",      15),
    mv("Ice Punch",       15),
    mv("Thunder Punch",   15),
    mv("Scratch",         35),
    mv("Vice Grip",       30),
    mv("Guillotine",       5),
    mv("Razor Wind",      10),
    mv("Swords Dance",    30),
    mv("Cut",             30),
    mv("Gust",            35),
    mv("Wing Attack",     35),
    mv("Whirlwind",       20),
    mv("Fly",             15),
    mv("Bind",            20),
    mv("Slam",            20),
    mv("Vine Whip",       10),
    mv("Stomp",           20),
    mv("Double Kick",     30),
    mv("Mega Kick",        5),
    mv("Jump Kick",       25),
    mv("Rolling Kick",    15),
    mv("Sand Attack",     15),
    mv("Headbutt",        15),
    mv("Horn Attack",     25),
    mv("Fury Attack",     20),
    mv("Horn Drill",       5),
    mv("Tackle",          35),
    mv("Body Slam",       15),
    mv("Wrap",            20),
    mv("Take Down",       20),
    mv("Thrash",          20),
    mv("Double-Edge",     15),
    mv("Tail Whip",       30),
    mv("Poison Sting",    35),
    mv("Twineedle",       20),
    mv("Pin Missile",     20),
    mv("Leer",            30),
    mv("Bite",            25),
    mv("Growl",           40),
    mv("Roar",            20),
    mv("Sing",            15),
    mv("Supersonic",      20),
    mv("Sonic Boom",      20),
    mv("Disable",         20),
    mv("Acid",            30),
    mv("Ember",           25),
    mv("Flamethrower",    15),
    mv("Mist",            30),
    mv("Water Gun",       25),
    mv("Hydro Pump",       5),
    mv("Surf",            15),
    mv("Ice Beam",        10),
    mv("Blizzard",         5),
    mv("Psybeam",         20),
    mv("Bubble Beam",     20),
    mv("Aurora Beam",     20),
    mv("Hyper Beam",       5),
    mv("Peck",            35),
    mv("Drill Peck",      20),
    mv("Submission",      25),
    mv("Low Kick",        20),
    mv("Counter",         20),
    mv("Seismic Toss",    20),
    mv("Strength",        15),
    mv("Absorb",          20),
    mv("Mega Drain",      10),
    mv("Leech Seed",      10),
    mv("Growth",          40),
    mv("Razor Leaf",      25),
    mv("Solar Beam",      10),
    mv("Poison Powder",   35),
    mv("Stun Spore",      30),
    mv("Sleep Powder",    15),
    mv("Petal Dance",     20),
    mv("String Shot",     40),
    mv("Dragon Rage",     10),
    mv("Fire Spin",       15),
    mv("Thunder Shock",   30),
    mv("Thunderbolt",     15),
    mv("Thunder Wave",    20),
    mv("Thunder",         10),
    mv("Rock Throw",      15),
    mv("Earthquake",      10),
    mv("Fissure",          5),
    mv("Dig",             10),
    mv("Toxic",           10),
    mv("Confusion",       25),
    mv("Psychic",         10),
    mv("Hypnosis",        20),
    mv("Meditate",        40),
    mv("Agility",         30),
    mv("Quick Attack",    30),
    mv("Rage",            20),
    mv("Teleport",        20),
    mv("Night Shade",     15),
    mv("Mimic",           10),
    mv("Screech",         40),
    mv("Double Team",     15),
    mv("Recover",         20),
    mv("Harden",          30),
    mv("Minimize",        20),
    mv("Smokescreen",     20),
    mv("Confuse Ray",     10),
    mv("Withdraw",        40),
    mv("Defense Curl",    40),
    mv("Barrier",         30),
    mv("Light Screen",    30),
    mv("Haze",            30),
    mv("Reflect",         20),
    mv("Focus Energy",    30),
    mv("Bide",            10),
    mv("Metronome",       10),
    mv("Mirror Move",     20),
    mv("Self-Destruct",    5),
    mv("Egg Bomb",        10),
    mv("Lick",            30),
    mv("Smog",            20),
    mv("Sludge",          20),
    mv("Bone Club",       20),
    mv("Fire Blast",       5),
    mv("Waterfall",       15),
    mv("Clamp",           10),
    mv("Swift",           20),
    mv("Skull Bash",      15),
    mv("Spike Cannon",    15),
    mv("Constrict",       35),
    mv("Amnesia",         20),
    mv("Kinesis",         15),
    mv("Soft-Boiled",     10),
    mv("High Jump Kick",  20),
    mv("Glare",           30),
    mv("Dream Eater",     15),
    mv("Poison Gas",      40),
    mv("Barrage",         20),
    mv("Leech Life",      15),
    mv("Lovely Kiss",     10),
    mv("Sky Attack",       5),
    mv("Transform",       10),
    mv("Bubble",          30),
    mv("Dizzy Punch",     10),
    mv("Spore",           15),
    mv("Flash",           20),
    mv("Psywave",         15),
    mv("Splash",          40),
    mv("Acid Armor",      40),
    mv("Crabhammer",      10),
    mv("Explosion",        5),
    mv("Fury Swipes",     15),
    mv("Bonemerang",      10),
    mv("Rest",            10),
    mv("Rock Slide",      10),
    mv("Hyper Fang",      15),
    mv("Sharpen",         30),
    mv("Conversion",      30),
    mv("Tri Attack",      10),
    mv("Super Fang",      10),
    mv("Slash",           20),
    mv("Substitute",      10),
    mv("Struggle",         1),
    mv("Sketch",           1),
    mv("Triple Kick",     10),
    mv("Thief",           10),
    mv("Spider Web",      10),
    mv("Mind Reader",      5),
    mv("Nightmare",       15),
    mv("Flame Wheel",     25),
    mv("Snore",           15),
    mv("Curse",           10),
    mv("Flail",           15),
    mv("Conversion 2",    30),
    mv("Aeroblast",        5),
    mv("Cotton Spore",    40),
    mv("Reversal",        15),
    mv("Spite",           10),
    mv("Powder Snow",     25),
    mv("Protect",         10),
    mv("Mach Punch",      30),
    mv("Scary Face",      10),
    mv("Feint Attack",    20),
    mv("Sweet Kiss",      10),
    mv("Belly Drum",      10),
    mv("Sludge Bomb",     10),
    mv("Mud-Slap",        10),
    mv("Octazooka",       10),
    mv("Spikes",          20),
    mv("Zap Cannon",       5),
    mv("Foresight",       40),
    mv("Destiny Bond",     5),
    mv("Perish Song",      5),
    mv("Icy Wind",        15),
    mv("Detect",           5),
    mv("Bone Rush",       10),
    mv("Lock-On",          5),
    mv("Outrage",         15),
    mv("Sandstorm",       10),
    mv("Giga Drain",       5),
    mv("Endure",          10),
    mv("Charm",           20),
    mv("Rollout",         20),
    mv("False Swipe",     40),
    mv("Swagger",         15),
    mv("Milk Drink",      10),
    mv("Spark",           20),
    mv("Fury Cutter",     20),
    mv("Steel Wing",      25),
    mv("Mean Look",        5),
    mv("Attract",         15),
    mv("Sleep Talk",      10),
    mv("Heal Bell",        5),
    mv("Return",          20),
    mv("Present",         15),
    mv("Frustration",     20),
    mv("Safeguard",       25),
    mv("Pain Split",      20),
    mv("Sacred Fire",      5),
    mv("Magnitude",       30),
    mv("Dynamic Punch",    5),
    mv("Megahorn",        10),
    mv("Dragon Breath",   20),
    mv("Baton Pass",      40),
    mv("Encore",           5),
    mv("Pursuit",         20),
    mv("Rapid Spin",      40),
    mv("Sweet Scent",     20),
    mv("Iron Tail",       15),
    mv("Metal Claw",      35),
    mv("Vital Throw",     10),
    mv("Morning Sun",      5),
    mv("Synthesis",        5),
    mv("Moonlight",        5),
    mv("Hidden Power",    15),
    mv("Cross Chop",       5),
    mv("Twister",         20),
    mv("Rain Dance",       5),
    mv("Sunny Day",        5),
    mv("Crunch",          15),
    mv("Mirror Coat",     20),
    mv("Psych Up",        10),
    mv("Extreme Speed",    5),
    mv("Ancient Power",    5),
    mv("Shadow Ball",     15),
    mv("Future Sight",    15),
    mv("Rock Smash",      15),
    mv("Whirlpool",       15),
    mv("Beat Up",         10),
    mv("Fake Out",        10),
    mv("Uproar",          10),
    mv("Stockpile",       10),
    mv("Spit Up",         10),
    mv("Swallow",         10),
    mv("Heat Wave",       10),
    mv("Hail",            10),
    mv("Torment",         15),
    mv("Flatter",         15),
    mv("Will-O-Wisp",     15),
    mv("Memento",         10),
    mv("Facade",          20),
    mv("Focus Punch",     20),
    mv("Smelling Salts",  10),
    mv("Follow Me",       20),
    mv("Nature Power",    20),
    mv("Charge",          20),
    mv("Taunt",           20),
    mv("Helping Hand",    20),
    mv("Trick",           10),
    mv("Role Play",       10),
    mv("Wish",            10),
    mv("Assist",          20),
    mv("Ingrain",         20),
    mv("Superpower",       5),
    mv("Magic Coat",      15),
    mv("Recycle",         10),
    mv("Revenge",         10),
    mv("Brick Break",     15),
    mv("Yawn",            10),
    mv("Knock Off",       20),
    mv("Endeavor",         5),
    mv("Eruption",         5),
    mv("Skill Swap",      10),
    mv("Imprison",        10),
    mv("Refresh",         20),
    mv("Grudge",           5),
    mv("Snatch",          10),
    mv("Secret Power",    20),
    mv("Dive",            10),
    mv("Arm Thrust",      20),
    mv("Camouflage",      20),
    mv("Tail Glow",       20),
    mv("Luster Purge",     5),
    mv("Mist Ball",        5),
    mv("Feather Dance",   15),
    mv("Teeter Dance",    20),
    mv("Blaze Kick",      10),
    mv("Mud Sport",       15),
    mv("Ice Ball",        20),
    mv("Needle Arm",      15),
    mv("Slack Off",       10),
    mv("Hyper Voice",     10),
    mv("Poison Fang",     15),
    mv("Crush Claw",      10),
    mv("Blast Burn",       5),
    mv("Hydro Cannon",     5),
    mv("Meteor Mash",     10),
    mv("Astonish",        15),
    mv("Weather Ball",    10),
    mv("Aromatherapy",     5),
    mv("Fake Tears",      20),
    mv("Air Cutter",      25),
    mv("Overheat",         5),
    mv("Odor Sleuth",     40),
    mv("Rock Tomb",       10),
    mv("Silver Wind",      5),
    mv("Metal Sound",     40),
    mv("Grass Whistle",   15),
    mv("Tickle",          20),
    mv("Cosmic Power",    20),
    mv("Water Spout",      5),
    mv("Signal Beam",     15),
    mv("Shadow Punch",    20),
    mv("Extrasensory",    30),
    mv("Sky Uppercut",    15),
    mv("Sand Tomb",       15),
    mv("Sheer Cold",       5),
    mv("Muddy Water",     10),
    mv("Bullet Seed",     30),
    mv("Aerial Ace",      20),
    mv("Icicle Spear",    30),
    mv("Iron Defense",    15),
    mv("Block",            5),
    mv("Howl",            40),
    mv("Dragon Claw",     15),
    mv("Frenzy Plant",     5),
    mv("Bulk Up",         20),
    mv("Bounce",           5),
    mv("Mud Shot",        15),
    mv("Poison Tail",     25),
    mv("Covet",           40),
    mv("Volt Tackle",     15),
    mv("Magical Leaf",    20),
    mv("Water Sport",     15),
    mv("Calm Mind",       20),
    mv("Leaf Blade",      15),
    mv("Dragon Dance",    20),
    mv("Rock Blast",      10),
    mv("Shock Wave",      20),
    mv("Water Pulse",     20),
    mv("Doom Desire",      5),
    mv("Psycho Boost",     5),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_one_based() {
        assert_eq!(name(1), "Pound");
        assert_eq!(name(TACKLE), "Tackle");
        assert_eq!(name(GROWL), "Growl");
        assert_eq!(name(GEN1_MAX_MOVE_ID), "Struggle");
        assert_eq!(name(GEN2_MAX_MOVE_ID), "Beat Up");
        assert_eq!(name(MAX_MOVE_ID), "Psycho Boost");
        assert_eq!(name(0), "-");
        assert_eq!(name(355), "???");
    }

    #[test]
    fn pp_ups_scale_base_pp() {
        assert_eq!(max_pp(TACKLE, 0, 3), 35);
        assert_eq!(max_pp(TACKLE, 3, 3), 56);
        assert_eq!(max_pp(GROWL, 3, 3), 64);
        assert_eq!(max_pp(GROWL, 3, 1), 61);
        assert_eq!(max_pp(166, 3, 3), 1);
        assert_eq!(max_pp(0, 3, 3), 0);
    }
}
