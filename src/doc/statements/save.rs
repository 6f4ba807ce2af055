/*!
# `SAVE "<name>"`

## Purpose
Store the program on the program host.

## Remarks
Names without an extension get `.bas`. A dot is shown for every line
sent.

## Example
```text
SAVE "hello"
Saving.....
Ready.
```

*/
