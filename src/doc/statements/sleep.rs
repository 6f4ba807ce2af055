/*!
# `SLEEP <number expression>`

## Purpose
Wait a number of milliseconds.

## Remarks
Ctrl-C ends the wait early.

## Example
```text
SLEEP 500
```

*/
