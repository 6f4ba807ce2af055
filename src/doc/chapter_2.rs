/*!
# Statements
*/

#[path = "statements/at.rs"]
#[allow(non_snake_case)]
pub mod AT;

#[path = "statements/clear.rs"]
#[allow(non_snake_case)]
pub mod CLEAR;

#[path = "statements/cls.rs"]
#[allow(non_snake_case)]
pub mod CLS;

#[path = "statements/cursor.rs"]
#[allow(non_snake_case)]
pub mod CURSOR;

#[path = "statements/dir.rs"]
#[allow(non_snake_case)]
pub mod DIR;

#[path = "statements/free.rs"]
#[allow(non_snake_case)]
pub mod FREE;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/home.rs"]
#[allow(non_snake_case)]
pub mod HOME;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/led.rs"]
#[allow(non_snake_case)]
pub mod LED;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/list.rs"]
#[allow(non_snake_case)]
pub mod LIST;

#[path = "statements/load.rs"]
#[allow(non_snake_case)]
pub mod LOAD;

#[path = "statements/new.rs"]
#[allow(non_snake_case)]
pub mod NEW;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/put.rs"]
#[allow(non_snake_case)]
pub mod PUT;

#[path = "statements/run.rs"]
#[allow(non_snake_case)]
pub mod RUN;

#[path = "statements/save.rs"]
#[allow(non_snake_case)]
pub mod SAVE;

#[path = "statements/seed.rs"]
#[allow(non_snake_case)]
pub mod SEED;

#[path = "statements/sleep.rs"]
#[allow(non_snake_case)]
pub mod SLEEP;

#[path = "statements/synth.rs"]
#[allow(non_snake_case)]
pub mod SYNTH;
