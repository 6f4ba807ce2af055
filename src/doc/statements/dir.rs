/*!
# `DIR`

## Purpose
List the program files of the program host.

## Remarks
One name per line, then `Ready.`. Ctrl-C stops the listing.

## Example
```text
DIR
game.bas
hello.bas
Ready.
```

*/
